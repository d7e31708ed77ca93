//! User-facing text in the two supported languages.
//!
//! Everything a visitor or spreadsheet user reads comes from a [`Labels`]
//! table: photo captions, export headers, notices, and view texts. Profile
//! content itself is never translated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "he")]
    Hebrew,
}

impl Language {
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH,
            Language::Hebrew => &HEBREW,
        }
    }

    /// BCP 47 tag for the `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hebrew => "he",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Language::English => "ltr",
            Language::Hebrew => "rtl",
        }
    }
}

/// Static text table for one language.
///
/// Caption fields are prefixes: the owner's name is appended directly, with
/// no separator added.
#[derive(Debug)]
pub struct Labels {
    pub caption_high_school: &'static str,
    pub caption_current: &'static str,
    pub caption_gallery: &'static str,

    /// Header row of the tabular export, in column order.
    pub tabular_headers: [&'static str; 12],
    pub tabular_empty_notice: &'static str,

    pub narrative_separator: &'static str,
    pub narrative_slide_for: &'static str,
    pub narrative_high_school_photo: &'static str,
    pub narrative_current_photo: &'static str,
    pub narrative_present: &'static str,
    pub narrative_absent: &'static str,
    pub narrative_memory: &'static str,
    pub narrative_teacher: &'static str,
    pub narrative_embarrassing_moment: &'static str,
    pub narrative_song: &'static str,
    pub narrative_empty_notice: &'static str,

    pub tab_form: &'static str,
    pub tab_profiles: &'static str,
    pub tab_gallery: &'static str,
    pub tab_yearbook: &'static str,
    pub tab_outputs: &'static str,

    pub form_heading: &'static str,
    pub form_hint: &'static str,
    pub form_high_school_photo: &'static str,
    pub form_current_photo: &'static str,
    pub section_personal: &'static str,
    pub section_photos: &'static str,
    pub section_nostalgia: &'static str,
    pub section_extras: &'static str,

    pub profiles_empty_title: &'static str,
    pub profiles_empty_hint: &'static str,
    pub profile_memory: &'static str,
    pub profile_teacher: &'static str,
    pub profile_song: &'static str,
    pub profile_social_link: &'static str,
    /// Joins role and workplace on a profile card ("Engineer at Acme").
    pub profile_at: &'static str,

    pub gallery_empty_title: &'static str,
    pub gallery_empty_hint: &'static str,

    pub yearbook_heading: &'static str,
    pub yearbook_empty_title: &'static str,
    pub yearbook_empty_hint: &'static str,

    pub outputs_heading: &'static str,
    pub outputs_intro: &'static str,
    pub outputs_tabular_title: &'static str,
    pub outputs_tabular_hint: &'static str,
    pub outputs_tabular_action: &'static str,
    pub outputs_narrative_title: &'static str,
    pub outputs_narrative_hint: &'static str,
    pub outputs_narrative_action: &'static str,
    pub outputs_photos_note: &'static str,
}

pub static ENGLISH: Labels = Labels {
    caption_high_school: "High-school photo of ",
    caption_current: "Current photo of ",
    caption_gallery: "Photo from ",

    tabular_headers: [
        "Full name",
        "Date of birth",
        "Classes",
        "City",
        "Workplace",
        "Role",
        "Social link",
        "Memory",
        "Influential teacher",
        "Embarrassing moment",
        "Song",
        "Dedication",
    ],
    tabular_empty_notice: "No data to download.",

    narrative_separator: "-----------------------------------------",
    narrative_slide_for: "Slide for: ",
    narrative_high_school_photo: "High-school photo: ",
    narrative_current_photo: "Current photo: ",
    narrative_present: "present",
    narrative_absent: "missing",
    narrative_memory: "Memory: ",
    narrative_teacher: "Influential teacher: ",
    narrative_embarrassing_moment: "Embarrassing moment: ",
    narrative_song: "Song of the era: ",
    narrative_empty_notice: "No profiles to build a presentation from.",

    tab_form: "Fill in a profile",
    tab_profiles: "Profiles",
    tab_gallery: "Gallery",
    tab_yearbook: "Yearbook",
    tab_outputs: "Downloads",

    form_heading: "Tell us about yourself",
    form_hint: "Save your answers as a submission file (see `reunion-book gen-profile`) and drop it into the submissions folder.",
    form_high_school_photo: "High-school photo",
    form_current_photo: "Current photo",
    section_personal: "Personal and professional details",
    section_photos: "Then and now",
    section_nostalgia: "A little nostalgia...",
    section_extras: "Keepsakes",

    profiles_empty_title: "No profiles yet",
    profiles_empty_hint: "Be the first to fill in your profile!",
    profile_memory: "High-school memory:",
    profile_teacher: "The teacher who made a difference:",
    profile_song: "Song of the era:",
    profile_social_link: "Social profile",
    profile_at: " at ",

    gallery_empty_title: "The gallery is still empty",
    gallery_empty_hint: "Add photos to your profile to start filling the shared gallery!",

    yearbook_heading: "Yearbook dedications",
    yearbook_empty_title: "The yearbook is empty",
    yearbook_empty_hint: "Write a dedication in your profile to fill the digital yearbook!",

    outputs_heading: "Downloads",
    outputs_intro: "Everything collected so far, ready for the slideshow, the video, and the keepsakes.",
    outputs_tabular_title: "Data report (CSV)",
    outputs_tabular_hint: "All text answers from everyone in one spreadsheet. Handy for a printed yearbook.",
    outputs_tabular_action: "Download CSV",
    outputs_narrative_title: "Presentation notes",
    outputs_narrative_hint: "A tidy text file with quotes from every profile, ready to paste into slides.",
    outputs_narrative_action: "Download text",
    outputs_photos_note: "Photos are not part of the downloads. Save them from the gallery or the profiles page.",
};

pub static HEBREW: Labels = Labels {
    caption_high_school: "תמונת תיכון של ",
    caption_current: "תמונה עדכנית של ",
    caption_gallery: "תמונה מ",

    tabular_headers: [
        "שם מלא",
        "תאריך לידה",
        "כיתות",
        "עיר מגורים",
        "מקום עבודה",
        "תפקיד",
        "קישור חברתי",
        "זיכרון",
        "מורה משפיע",
        "רגע מביך",
        "שיר התקופה",
        "הקדשה",
    ],
    tabular_empty_notice: "אין נתונים להורדה.",

    narrative_separator: "-----------------------------------------",
    narrative_slide_for: "שקופית עבור: ",
    narrative_high_school_photo: "תמונת תיכון: ",
    narrative_current_photo: "תמונה עדכנית: ",
    narrative_present: "קיימת",
    narrative_absent: "לא קיימת",
    narrative_memory: "ציטוט 1 (זיכרון): ",
    narrative_teacher: "מורה משפיע: ",
    narrative_embarrassing_moment: "ציטוט 2 (רגע מביך): ",
    narrative_song: "שיר התקופה: ",
    narrative_empty_notice: "אין פרופילים ליצירת מצגת.",

    tab_form: "✍️ מילוי פרופיל",
    tab_profiles: "👥 פרופילים",
    tab_gallery: "🖼️ גלריה",
    tab_yearbook: "📖 ספר מחזור",
    tab_outputs: "🎬 הפקת תוצרים",

    form_heading: "ספרו לנו על עצמכם",
    form_hint: "שמרו את התשובות כקובץ הגשה (ראו `reunion-book gen-profile`) והוסיפו אותו לתיקיית ההגשות.",
    form_high_school_photo: "תמונה מהתיכון",
    form_current_photo: "תמונה עדכנית",
    section_personal: "פרטים אישיים ומקצועיים",
    section_photos: "תמונות של אז והיום",
    section_nostalgia: "קצת נוסטלגיה...",
    section_extras: "תוספות למזכרת",

    profiles_empty_title: "עדיין אין פרופילים",
    profiles_empty_hint: "היו הראשונים למלא את הפרופיל שלכם!",
    profile_memory: "זיכרון מהתיכון:",
    profile_teacher: "המורה שהשפיע/ה:",
    profile_song: "השיר של התקופה:",
    profile_social_link: "פרופיל חברתי",
    profile_at: " ב-",

    gallery_empty_title: "הגלריה עדיין ריקה",
    gallery_empty_hint: "העלו תמונות מהתיכון בטופס הפרופיל כדי להתחיל למלא את הגלריה המשותפת!",

    yearbook_heading: "הקדשות בספר המחזור",
    yearbook_empty_title: "ספר המחזור ריק",
    yearbook_empty_hint: "כתבו הקדשה לחברים בטופס הפרופיל כדי למלא את ספר המחזור הדיגיטלי!",

    outputs_heading: "הפקת תוצרים",
    outputs_intro: "כאן תוכלו להוריד את כל הנתונים שנאספו בפורמטים שונים כדי להכין את המצגת, הסרטון והמזכרות למפגש.",
    outputs_tabular_title: "דו\"ח נתונים (CSV)",
    outputs_tabular_hint: "קובץ Excel (CSV) המרכז את כל התשובות הטקסטואליות של כולם.",
    outputs_tabular_action: "הורדת CSV",
    outputs_narrative_title: "נתונים למצגת/סרטון",
    outputs_narrative_hint: "קובץ טקסט מסודר עם הציטוטים והמידע מכל פרופיל, מוכן להעתקה והדבקה למצגת.",
    outputs_narrative_action: "הורדת נתוני טקסט",
    outputs_photos_note: "הורדת התמונות אינה נתמכת ישירות מכאן. ניתן לשמור אותן ידנית מהגלריה או מלשונית הפרופילים.",
};
