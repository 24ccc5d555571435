//! Plain terminal output for the `list` command

use crate::render::ListItemView;
use rust_i18n::t;

/// Print rendered items as text
pub fn print_list(items: &[ListItemView], total: usize, locale: &str) {
    if items.is_empty() {
        println!("{}", t!("cli_no_matches", locale = locale));
        return;
    }

    for item in items {
        println!("{}", format_item(item));
    }
    println!("{}", "─".repeat(60));
    println!(
        "{}",
        t!("cli_results", locale = locale, shown = items.len(), total = total)
    );
}

/// Text block for one item
pub fn format_item(item: &ListItemView) -> String {
    let mut out = String::new();

    out.push_str(item.name.as_deref().unwrap_or_default());
    for badge in [item.delivery_badge, item.staff_pick_badge].into_iter().flatten() {
        out.push_str(&format!(" [{badge}]"));
    }
    out.push('\n');

    for detail in [&item.address, &item.phone, &item.description].into_iter().flatten() {
        out.push_str(&format!("  {detail}\n"));
    }

    let offers: Vec<&str> = item.visible_offers().collect();
    if !offers.is_empty() {
        out.push_str(&format!("  {}\n", offers.join(" · ")));
    }

    if let Some(cta) = &item.call_to_action {
        out.push_str(&format!("  → {}: {}\n", cta.label, cta.href));
    }

    out
}

/// Whether to run interactive mode (no arguments given)
pub fn should_run_interactive() -> bool {
    std::env::args().len() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::content;
    use crate::i18n::Language;
    use crate::restaurant::RestaurantRecord;

    #[test]
    fn test_format_item() {
        let record = RestaurantRecord {
            phone: Some("+351 239 000 000".into()),
            offerings: vec!["Food".into(), "Coimbra".into(), "Sushi".into()],
            staff_pick: true,
            ..RestaurantRecord::new("Zé Manel", "Tascos", "zemanel.pt")
        };
        let item = ListItemView::from_record(&record, &content(Language::Portuguese).list);

        assert_eq!(
            format_item(&item),
            "Zé Manel [Destaque]\n  +351 239 000 000\n  Tascos\n  Comida · Coimbra\n  → Encomendar: https://zemanel.pt\n"
        );
    }

    #[test]
    fn test_format_item_minimal() {
        let item = ListItemView::from_record(&RestaurantRecord::default(), &content(Language::English).list);
        assert_eq!(format_item(&item), "\n");
    }
}
