//! Application Metadata
//!
//! Compile-time document metadata, applied once at startup.

/// Document-level metadata for the installed web app
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppMeta {
    pub title: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub theme_color: &'static str,
    pub viewport: &'static str,
    pub manifest: &'static str,
    pub status_bar_style: &'static str,
}

pub const APP_META: AppMeta = AppMeta {
    title: "Scout - Resource Finder",
    short_name: "Scout",
    description: "Find and save resources with Scout",
    theme_color: "#1e293b",
    viewport: "width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no",
    manifest: "/manifest.json",
    status_bar_style: "black-translucent",
};

impl AppMeta {
    /// `<meta name=... content=...>` pairs for the document head
    pub fn meta_tags(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("description", self.description),
            ("viewport", self.viewport),
            ("theme-color", self.theme_color),
            ("apple-mobile-web-app-capable", "yes"),
            ("apple-mobile-web-app-status-bar-style", self.status_bar_style),
            ("apple-mobile-web-app-title", self.short_name),
        ]
    }

    /// `<link rel=... href=...>` pairs for the document head
    pub fn link_tags(&self) -> Vec<(&'static str, &'static str)> {
        vec![("manifest", self.manifest)]
    }
}

/// Find the `<tag key="value">` head element, creating it if absent
fn upsert_head_element(
    document: &web_sys::Document,
    head: &web_sys::HtmlHeadElement,
    tag: &str,
    key: &str,
    value: &str,
) -> Result<web_sys::Element, String> {
    let selector = format!("{}[{}=\"{}\"]", tag, key, value);
    let existing = document
        .query_selector(&selector)
        .map_err(|e| format!("query_selector failed: {:?}", e))?;
    if let Some(el) = existing {
        return Ok(el);
    }

    let el = document
        .create_element(tag)
        .map_err(|e| format!("create_element failed: {:?}", e))?;
    el.set_attribute(key, value)
        .map_err(|e| format!("set_attribute failed: {:?}", e))?;
    head.append_child(&el)
        .map_err(|e| format!("append_child failed: {:?}", e))?;
    Ok(el)
}

/// Set the document title and upsert the head `<meta>` and `<link>` tags
pub fn apply_document_metadata(meta: &AppMeta) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document available")?;
    document.set_title(meta.title);

    let head = document.head().ok_or("Document has no <head>")?;
    for (name, content) in meta.meta_tags() {
        upsert_head_element(&document, &head, "meta", "name", name)?
            .set_attribute("content", content)
            .map_err(|e| format!("set_attribute failed: {:?}", e))?;
    }
    for (rel, href) in meta.link_tags() {
        upsert_head_element(&document, &head, "link", "rel", rel)?
            .set_attribute("href", href)
            .map_err(|e| format!("set_attribute failed: {:?}", e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_disables_zoom() {
        let tags = APP_META.meta_tags();
        let viewport = tags.iter().find(|(name, _)| *name == "viewport").unwrap().1;
        assert!(viewport.contains("maximum-scale=1"));
        assert!(viewport.contains("user-scalable=no"));
    }

    #[test]
    fn test_manifest_link() {
        assert_eq!(APP_META.link_tags(), vec![("manifest", "/manifest.json")]);
    }

    #[test]
    fn test_meta_tags_are_unique() {
        let tags = APP_META.meta_tags();
        let mut names: Vec<&str> = tags.iter().map(|(name, _)| *name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), tags.len());
    }
}
