//! Renders the table view-model as plain terminal lines.

use shortlist_core::{CompanyRowView, TableViewModel};

pub fn render(view: &TableViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(status_line(view));
    if let Some(alert) = &view.alert {
        lines.push(format!("!! {alert}"));
    }
    for row in &view.rows {
        lines.push(format_company_row(row));
    }
    lines.push(pager_line(view));
    lines
}

fn status_line(view: &TableViewModel) -> String {
    let collection = view
        .selected_collection
        .as_ref()
        .and_then(|id| view.collections.iter().find(|c| &c.id == id))
        .map(|c| c.name.as_str())
        .unwrap_or("-");
    let bulk = if view.bulk_in_flight { "busy" } else { "idle" };
    let liked = if view.liked_ready { "ready" } else { "unresolved" };
    format!(
        "Collection: {} | Rows: {} | Selected: {} | Bulk: {} | Liked list: {}",
        collection, view.row_count, view.selection_count, bulk, liked
    )
}

fn format_company_row(row: &CompanyRowView) -> String {
    let mark = if row.selected { "[x]" } else { "[ ]" };
    let star = if row.liked { "⭐" } else { "☆" };
    format!("{mark} {star} #{id} {name}", id = row.id, name = row.name)
}

fn pager_line(view: &TableViewModel) -> String {
    format!(
        "Page {}/{} ({} per page)",
        view.page + 1,
        view.page_count.max(1),
        view.page_size
    )
}

#[cfg(test)]
mod tests {
    use shortlist_core::CollectionRef;

    use super::*;

    fn view() -> TableViewModel {
        TableViewModel {
            collections: vec![CollectionRef {
                id: "col-main".to_string(),
                name: "My List".to_string(),
            }],
            selected_collection: Some("col-main".to_string()),
            rows: vec![
                CompanyRowView {
                    id: 5,
                    name: "Acme".to_string(),
                    liked: true,
                    selected: false,
                },
                CompanyRowView {
                    id: 7,
                    name: "Globex".to_string(),
                    liked: false,
                    selected: true,
                },
            ],
            row_count: 57,
            page: 2,
            page_count: 3,
            page_size: 25,
            selection_count: 1,
            liked_ready: true,
            ..TableViewModel::default()
        }
    }

    #[test]
    fn status_line_shows_full_row_count() {
        let lines = render(&view());

        assert_eq!(
            lines[0],
            "Collection: My List | Rows: 57 | Selected: 1 | Bulk: idle | Liked list: ready"
        );
    }

    #[test]
    fn rows_show_star_and_selection_marker() {
        let lines = render(&view());

        assert_eq!(lines[1], "[ ] ⭐ #5 Acme");
        assert_eq!(lines[2], "[x] ☆ #7 Globex");
    }

    #[test]
    fn pager_is_one_based() {
        let lines = render(&view());

        assert_eq!(lines.last().map(String::as_str), Some("Page 3/3 (25 per page)"));
    }

    #[test]
    fn alert_renders_after_status() {
        let mut with_alert = view();
        with_alert.alert = Some("Failed to update like status. Please try again.".to_string());

        let lines = render(&with_alert);

        assert_eq!(
            lines[1],
            "!! Failed to update like status. Please try again."
        );
    }

    #[test]
    fn empty_view_still_renders_status_and_pager() {
        let lines = render(&TableViewModel::default());

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Collection: - | Rows: 0"));
    }
}
