use web_sys::window;

// Updates the document title and description for the current page.
// Missing document or missing meta tag just means nothing is updated.
pub fn set_page_meta(title: &str, description: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
        if let Ok(Some(tag)) = document.query_selector("meta[name='description']") {
            let _ = tag.set_attribute("content", description);
        }
    }
}
