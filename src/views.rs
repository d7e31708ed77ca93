//! Static HTML pages for each view of the session.
//!
//! ## Views
//!
//! | View | File | Content |
//! |------|------|---------|
//! | Form | `index.html` | The questionnaire, grouped into sections |
//! | Profiles | `profiles.html` | One card per profile, in submission order |
//! | Gallery | `gallery.html` | Every photo from every profile, captioned |
//! | Yearbook | `yearbook.html` | Non-blank dedications with their authors |
//! | Outputs | `outputs.html` | Links to the two export artifacts |
//!
//! Every page shares the event header (with the markdown description) and a
//! tab bar marking the active view. Page text comes from the configured
//! [`Language`](crate::locale::Language); Hebrew pages are laid out
//! right-to-left.
//!
//! Pages are rendered with [maud](https://maud.lambda.xyz/). All profile text
//! is escaped on interpolation; only the config's markdown description is
//! inserted pre-rendered.

use crate::config::{self, ReunionConfig};
use crate::derive::{derive_dedications, derive_photos};
use crate::export::ExportKind;
use crate::locale::Labels;
use crate::store::ProfileStore;
use crate::types::Profile;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// The five pages of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Profiles,
    Gallery,
    Yearbook,
    Outputs,
}

impl View {
    /// Tab order.
    pub const ALL: [View; 5] = [
        View::Form,
        View::Profiles,
        View::Gallery,
        View::Yearbook,
        View::Outputs,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            View::Form => "index.html",
            View::Profiles => "profiles.html",
            View::Gallery => "gallery.html",
            View::Yearbook => "yearbook.html",
            View::Outputs => "outputs.html",
        }
    }

    pub fn label(self, labels: &Labels) -> &'static str {
        match self {
            View::Form => labels.tab_form,
            View::Profiles => labels.tab_profiles,
            View::Gallery => labels.tab_gallery,
            View::Yearbook => labels.tab_yearbook,
            View::Outputs => labels.tab_outputs,
        }
    }
}

/// Tracks which view is active and renders it.
///
/// Switching views does not touch the store; every render reads the current
/// profiles afresh.
#[derive(Debug, Default)]
pub struct ViewRouter {
    active: View,
}

impl ViewRouter {
    /// A router showing the form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, view: View) {
        log::debug!("switching view {:?} → {:?}", self.active, view);
        self.active = view;
    }

    pub fn active(&self) -> View {
        self.active
    }

    /// Render the active view against the current store contents.
    pub fn render(&self, store: &ProfileStore, config: &ReunionConfig) -> Markup {
        render_view(self.active, store, config)
    }
}

/// Render one view as a full HTML document.
pub fn render_view(view: View, store: &ProfileStore, config: &ReunionConfig) -> Markup {
    let labels = config.language.labels();
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );

    let body = match view {
        View::Form => render_form(labels),
        View::Profiles => render_profiles(store.all(), labels),
        View::Gallery => render_gallery(store, config),
        View::Yearbook => render_yearbook(store.all(), labels),
        View::Outputs => render_outputs(store.is_empty(), labels),
    };

    let content = html! {
        (site_header(config, render_nav(view, labels)))
        main class={ "view view-" (view.file_name().trim_end_matches(".html")) } {
            (body)
        }
    };

    let title = format!("{} · {}", view.label(labels), config.event.title);
    base_document(&title, &css, config, content)
}

/// Write every view into `output_dir`, returning the written paths in tab order.
pub fn render_site(
    store: &ProfileStore,
    config: &ReunionConfig,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, ViewError> {
    fs::create_dir_all(output_dir)?;
    let mut router = ViewRouter::new();
    let mut written = Vec::with_capacity(View::ALL.len());
    for view in View::ALL {
        router.select(view);
        let path = output_dir.join(view.file_name());
        fs::write(&path, router.render(store, config).into_string())?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

// ============================================================================
// HTML Components
// ============================================================================

fn markdown_to_html(source: &str) -> String {
    let parser = Parser::new(source);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, config: &ReunionConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.language.tag()) dir=(config.language.dir()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the event header above the tab bar
fn site_header(config: &ReunionConfig, nav: Markup) -> Markup {
    let event = &config.event;
    html! {
        header.site-header {
            h1.event-title { (event.title) }
            @if !event.subtitle.is_empty() {
                p.event-subtitle { (event.subtitle) }
            }
            @if !event.description.trim().is_empty() {
                div.event-description {
                    (PreEscaped(markdown_to_html(&event.description)))
                }
            }
            nav.tabs {
                (nav)
            }
        }
    }
}

/// Renders the tab bar, marking the active view
pub fn render_nav(active: View, labels: &Labels) -> Markup {
    html! {
        ul {
            @for view in View::ALL {
                li class=[(view == active).then_some("current")] {
                    a href=(view.file_name()) { (view.label(labels)) }
                }
            }
        }
    }
}

fn empty_state(title: &str, hint: &str) -> Markup {
    html! {
        div.empty-state {
            h2 { (title) }
            p { (hint) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

fn text_field(label: &str, name: &str, required: bool) -> Markup {
    html! {
        label.field {
            span { (label) }
            input type="text" name=(name) required[required];
        }
    }
}

fn area_field(label: &str, name: &str) -> Markup {
    html! {
        label.field {
            span { (label) }
            textarea name=(name) rows="3" {}
        }
    }
}

fn photo_field(label: &str, name: &str, required: bool, multiple: bool) -> Markup {
    html! {
        label.field {
            span { (label) }
            input type="file" name=(name) accept="image/*" required[required] multiple[multiple];
        }
    }
}

/// Renders the questionnaire. Field names match the submission file keys.
fn render_form(labels: &Labels) -> Markup {
    let h = &labels.tabular_headers;
    html! {
        h2 { (labels.form_heading) }
        p.hint { (labels.form_hint) }
        form.profile-form {
            fieldset {
                legend { (labels.section_personal) }
                (text_field(h[0], "full_name", true))
                (text_field(h[1], "date_of_birth", true))
                (text_field(h[2], "class_names", true))
                (text_field(h[3], "current_city", true))
                (text_field(h[4], "workplace", false))
                (text_field(h[5], "role", false))
                (text_field(h[6], "social_link", false))
            }
            fieldset {
                legend { (labels.section_photos) }
                (photo_field(labels.form_high_school_photo, "high_school_photo", true, false))
                (photo_field(labels.form_current_photo, "current_photo", true, false))
            }
            fieldset {
                legend { (labels.section_nostalgia) }
                (area_field(h[7], "memory"))
                (area_field(h[8], "teacher"))
                (area_field(h[9], "embarrassing_moment"))
                (text_field(h[10], "song", false))
            }
            fieldset {
                legend { (labels.section_extras) }
                (photo_field(labels.tab_gallery, "gallery_photos", false, true))
                (area_field(h[11], "yearbook_dedication"))
            }
        }
    }
}

/// Only plain web links become anchors; other schemes are dropped.
fn is_web_link(link: &str) -> bool {
    let lower = link.trim_start().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

fn profile_card(p: &Profile, labels: &Labels) -> Markup {
    let work = match (p.role.is_empty(), p.workplace.is_empty()) {
        (false, false) => Some(format!("{}{}{}", p.role, labels.profile_at, p.workplace)),
        (false, true) => Some(p.role.clone()),
        (true, false) => Some(p.workplace.clone()),
        (true, true) => None,
    };

    html! {
        article.profile-card id=(p.id.as_str()) {
            div.profile-photos {
                @if let Some(src) = &p.high_school_photo {
                    img src=(src) alt={ (labels.caption_high_school) (p.full_name) } loading="lazy";
                }
                @if let Some(src) = &p.current_photo {
                    img src=(src) alt={ (labels.caption_current) (p.full_name) } loading="lazy";
                }
            }
            h3 { (p.full_name) }
            p.profile-meta {
                (p.class_names) " · " (p.current_city)
            }
            @if let Some(work) = work {
                p.profile-work { (work) }
            }
            @if !p.memory.is_empty() {
                p { strong { (labels.profile_memory) } " " (p.memory) }
            }
            @if !p.teacher.is_empty() {
                p { strong { (labels.profile_teacher) } " " (p.teacher) }
            }
            @if !p.song.is_empty() {
                p { strong { (labels.profile_song) } " " (p.song) }
            }
            @if is_web_link(&p.social_link) {
                a.social-link href=(p.social_link) target="_blank" rel="noopener" {
                    (labels.profile_social_link)
                }
            }
        }
    }
}

fn render_profiles(profiles: &[Profile], labels: &Labels) -> Markup {
    if profiles.is_empty() {
        return empty_state(labels.profiles_empty_title, labels.profiles_empty_hint);
    }
    html! {
        div.profile-grid {
            @for p in profiles {
                (profile_card(p, labels))
            }
        }
    }
}

fn render_gallery(store: &ProfileStore, config: &ReunionConfig) -> Markup {
    let labels = config.language.labels();
    let photos = derive_photos(store.all(), config.language);
    if photos.is_empty() {
        return empty_state(labels.gallery_empty_title, labels.gallery_empty_hint);
    }
    html! {
        div.photo-grid {
            @for photo in &photos {
                figure.photo {
                    img src=(photo.image) alt=(photo.caption) loading="lazy";
                    figcaption { (photo.caption) }
                }
            }
        }
    }
}

fn render_yearbook(profiles: &[Profile], labels: &Labels) -> Markup {
    let dedications = derive_dedications(profiles);
    if dedications.is_empty() {
        return empty_state(labels.yearbook_empty_title, labels.yearbook_empty_hint);
    }
    html! {
        h2 { (labels.yearbook_heading) }
        div.yearbook {
            @for entry in &dedications {
                blockquote.dedication {
                    p.message { (entry.message) }
                    cite { (entry.author) }
                }
            }
        }
    }
}

fn render_outputs(empty: bool, labels: &Labels) -> Markup {
    let cards = [
        (
            ExportKind::Tabular,
            labels.outputs_tabular_title,
            labels.outputs_tabular_hint,
            labels.outputs_tabular_action,
            labels.tabular_empty_notice,
        ),
        (
            ExportKind::Narrative,
            labels.outputs_narrative_title,
            labels.outputs_narrative_hint,
            labels.outputs_narrative_action,
            labels.narrative_empty_notice,
        ),
    ];

    html! {
        h2 { (labels.outputs_heading) }
        p { (labels.outputs_intro) }
        div.output-cards {
            @for (kind, title, hint, action, notice) in cards {
                section.output-card {
                    h3 { (title) }
                    p.hint { (hint) }
                    @if empty {
                        span.button.disabled aria-disabled="true" title=(notice) { (action) }
                    } @else {
                        a.button href=(kind.file_name()) download { (action) }
                    }
                }
            }
        }
        p.note { (labels.outputs_photos_note) }
    }
}

// ============================================================================
// Tests
// ============================================================================
