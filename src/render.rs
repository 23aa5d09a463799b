//! List Renderer
//!
//! Turns the current item snapshot into the markup of the list body.
//! The whole body is regenerated on every call; there is no diffing.

use std::fmt::Write;

use crate::config::{CHECKED_CLASS, DELETE_CLASS, ENTRY_CLASS, ID_ATTR, INDEX_ATTR, TOGGLE_CLASS};
use crate::models::Item;

/// Markup for a single list entry at `index`
pub fn render_item(index: usize, item: &Item) -> String {
    let mut html = String::new();
    push_item(&mut html, index, item);
    html
}

/// Markup for the full list, one entry per item in store order
pub fn render_items(items: &[Item]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| render_item(index, item))
        .collect()
}

fn push_item(html: &mut String, index: usize, item: &Item) {
    let modifier = if item.checked { format!(" {}", CHECKED_CLASS) } else { String::new() };
    let toggle_label = if item.checked { "uncheck" } else { "check" };
    // Writing into a String never fails
    let _ = write!(
        html,
        concat!(
            r#"<li class="{entry}" {index_attr}="{index}" {id_attr}="{id}">"#,
            r#"<span class="shopping-item{modifier}">{name}</span>"#,
            r#"<div class="shopping-item-controls">"#,
            r#"<button type="button" class="shopping-item-toggle {toggle}"><span class="button-label">{toggle_label}</span></button>"#,
            r#"<button type="button" class="shopping-item-delete {delete}"><span class="button-label">delete</span></button>"#,
            r#"</div></li>"#,
        ),
        entry = ENTRY_CLASS,
        index_attr = INDEX_ATTR,
        index = index,
        id_attr = ID_ATTR,
        id = item.id,
        modifier = modifier,
        name = escape_html(&item.name),
        toggle = TOGGLE_CLASS,
        toggle_label = toggle_label,
        delete = DELETE_CLASS,
    );
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::parse_index;
    use crate::config::default_seed;
    use crate::store::ItemStore;

    /// (index, id, name, checked) read back from rendered markup
    fn entries(html: &str) -> Vec<(usize, u32, String, bool)> {
        html.split("<li ")
            .skip(1)
            .map(|entry| {
                let index = attr(entry, INDEX_ATTR);
                let id = attr(entry, ID_ATTR);
                let span = &entry[entry.find("<span class=\"shopping-item").unwrap()..];
                let class_end = span.find('>').unwrap();
                let text_end = span.find("</span>").unwrap();
                (
                    parse_index(&index).unwrap(),
                    id.parse().unwrap(),
                    span[class_end + 1..text_end].to_string(),
                    span[..class_end].contains(CHECKED_CLASS),
                )
            })
            .collect()
    }

    fn attr(entry: &str, name: &str) -> String {
        let key = format!("{}=\"", name);
        let start = entry.find(&key).unwrap() + key.len();
        let end = start + entry[start..].find('"').unwrap();
        entry[start..end].to_string()
    }

    fn seeded() -> ItemStore {
        ItemStore::with_seed(default_seed())
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(render_items(&[]), "");
    }

    #[test]
    fn test_seed_render() {
        let html = render_items(seeded().all());
        let rendered = entries(&html);
        assert_eq!(rendered.len(), 4);
        let names: Vec<&str> = rendered.iter().map(|e| e.2.as_str()).collect();
        assert_eq!(names, vec!["apples", "oranges", "milk", "bread"]);
        let checked: Vec<bool> = rendered.iter().map(|e| e.3).collect();
        assert_eq!(checked, vec![false, false, true, false]);
        assert_eq!(html.matches(CHECKED_CLASS).count(), 1);
    }

    #[test]
    fn test_render_reflects_store() {
        let mut store = seeded();
        store.add("eggs");
        store.toggle_at(1).unwrap();
        store.delete_at(0).unwrap();
        let rendered = entries(&render_items(store.all()));
        assert_eq!(rendered.len(), store.len());
        for (position, (index, id, name, checked)) in rendered.iter().enumerate() {
            let item = &store.all()[position];
            assert_eq!(*index, position);
            assert_eq!(*id, item.id);
            assert_eq!(name, &item.name);
            assert_eq!(*checked, item.checked);
        }
    }

    #[test]
    fn test_add_then_render() {
        let mut store = seeded();
        store.add("eggs");
        let rendered = entries(&render_items(store.all()));
        assert_eq!(rendered.len(), 5);
        assert_eq!(rendered[4], (4, 4, "eggs".to_string(), false));
    }

    #[test]
    fn test_delete_then_render() {
        let mut store = seeded();
        store.delete_at(1).unwrap();
        let rendered = entries(&render_items(store.all()));
        let names: Vec<&str> = rendered.iter().map(|e| e.2.as_str()).collect();
        assert_eq!(names, vec!["apples", "milk", "bread"]);
        assert_eq!(rendered[1], (1, 2, "milk".to_string(), true));
    }

    #[test]
    fn test_toggle_then_render() {
        let mut store = seeded();
        store.toggle_at(0).unwrap();
        let rendered = entries(&render_items(store.all()));
        let checked: Vec<&str> = rendered.iter().filter(|e| e.3).map(|e| e.2.as_str()).collect();
        assert_eq!(checked, vec!["apples", "milk"]);
    }

    #[test]
    fn test_entry_carries_both_controls() {
        let item = Item { id: 7, name: "tea".to_string(), checked: false };
        let html = render_item(3, &item);
        assert!(html.contains(&format!("{}=\"3\"", INDEX_ATTR)));
        assert!(html.contains(&format!("{}=\"7\"", ID_ATTR)));
        assert_eq!(html.matches(TOGGLE_CLASS).count(), 1);
        assert_eq!(html.matches(DELETE_CLASS).count(), 1);
        assert!(html.contains(ENTRY_CLASS));
    }

    #[test]
    fn test_names_are_escaped() {
        let item = Item { id: 0, name: "<b>fish & \"chips\"</b>".to_string(), checked: false };
        let html = render_item(0, &item);
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;fish &amp; &quot;chips&quot;&lt;/b&gt;"));
    }
}
