use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,

    // --- Loading screen ---
    pub loading_heading: String,
    pub loading_detail: String,

    // --- Error screen ---
    pub error_heading: String,

    // --- Charts ---
    pub chart_title_suffix: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "East Asian Stock Markets".to_string(),

    loading_heading: "Loading".to_string(),
    loading_detail: "Fetching daily index values...".to_string(),

    error_heading: "Error".to_string(),

    chart_title_suffix: "Stock Market".to_string(),
});
