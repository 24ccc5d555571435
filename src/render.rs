//! List rendering
//!
//! Projects filtered records into display items using the localized content
//! table. Rendering is independent of the output surface; the terminal UI and
//! the `list` command both draw from [`ListItemView`].

use crate::content::ListContent;
use crate::filter::{self, FilterState};
use crate::restaurant::RestaurantRecord;
use serde::Serialize;

/// Localized offering badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferBadge {
    pub tag: String,
    /// Empty when the tag has no entry in the content table
    pub label: &'static str,
}

/// Link to the restaurant's ordering page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub href: String,
    pub label: &'static str,
}

/// One rendered list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItemView {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub offers: Vec<OfferBadge>,
    /// Delivery badge text, present iff the record delivers
    pub delivery_badge: Option<&'static str>,
    /// Staff-pick badge text, present iff the record is a staff pick
    pub staff_pick_badge: Option<&'static str>,
    pub call_to_action: Option<CallToAction>,
}

impl ListItemView {
    /// Render a single record
    pub fn from_record(record: &RestaurantRecord, content: &ListContent) -> Self {
        Self {
            name: record.name().map(str::to_owned),
            address: record.address().map(str::to_owned),
            phone: record.phone().map(str::to_owned),
            description: record.description().map(str::to_owned),
            offers: record
                .offerings
                .iter()
                .map(|tag| OfferBadge {
                    tag: tag.clone(),
                    label: content.offer_label(tag),
                })
                .collect(),
            delivery_badge: record.delivery.then_some(content.delivery),
            staff_pick_badge: record.staff_pick.then_some(content.staff_pick),
            call_to_action: record.url().map(|url| CallToAction {
                href: normalize_url(url),
                label: content.order_label,
            }),
        }
    }

    /// Badge labels that have text
    pub fn visible_offers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.offers.iter().map(|b| b.label).filter(|l| !l.is_empty())
    }
}

/// Turn a bare domain into a link
///
/// Values already containing "http" anywhere are used verbatim; everything
/// else gets an `https://` prefix. No further validation is done.
pub fn normalize_url(url: &str) -> String {
    if url.contains("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Filter `records` with `state` and render what remains
pub fn render_list(
    records: &[RestaurantRecord],
    state: &FilterState,
    content: &ListContent,
) -> Vec<ListItemView> {
    filter::apply(records, state)
        .into_iter()
        .map(|record| ListItemView::from_record(record, content))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::content;
    use crate::i18n::Language;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com/menu"), "https://example.com/menu");
        // Heuristic only: any "http" substring counts
        assert_eq!(normalize_url("shop.httpbin.org"), "shop.httpbin.org");
    }

    #[test]
    fn test_render_full_record() {
        let record = RestaurantRecord {
            address: Some("Rua Augusta 1".into()),
            phone: Some("+351 210 000 000".into()),
            offerings: vec!["Wine".into(), "Sushi".into(), "Porto".into()],
            delivery: true,
            staff_pick: true,
            ..RestaurantRecord::new("Tasca", "Petiscos", "tasca.pt")
        };
        let item = ListItemView::from_record(&record, &content(Language::Portuguese).list);

        assert_eq!(item.name.as_deref(), Some("Tasca"));
        assert_eq!(item.address.as_deref(), Some("Rua Augusta 1"));
        assert_eq!(item.phone.as_deref(), Some("+351 210 000 000"));
        assert_eq!(item.offers.len(), 3);
        assert_eq!(item.offers[1].label, "");
        assert_eq!(item.visible_offers().collect::<Vec<_>>(), ["Vinho", "Porto"]);
        assert_eq!(item.delivery_badge, Some("Com Entrega"));
        assert_eq!(item.staff_pick_badge, Some("Destaque"));

        let cta = item.call_to_action.unwrap();
        assert_eq!(cta.href, "https://tasca.pt");
        assert_eq!(cta.label, "Encomendar");
    }

    #[test]
    fn test_render_optional_fields_absent() {
        let record = RestaurantRecord {
            address: Some(String::new()),
            ..RestaurantRecord::new("A", "d", "http://a.com")
        };
        let item = ListItemView::from_record(&record, &content(Language::English).list);

        assert!(item.address.is_none());
        assert!(item.phone.is_none());
        assert!(item.offers.is_empty());
        assert!(item.delivery_badge.is_none());
        assert!(item.staff_pick_badge.is_none());
        assert_eq!(item.call_to_action.unwrap().href, "http://a.com");
    }

    #[test]
    fn test_render_list_end_to_end() {
        let a = RestaurantRecord {
            delivery: true,
            offerings: vec!["Food".into()],
            ..RestaurantRecord::new("A", "d", "a.com")
        };
        let b = RestaurantRecord {
            offerings: vec!["Wine".into()],
            ..RestaurantRecord::new("B", "d2", "b.com")
        };
        let records = vec![a, b];

        let mut state = FilterState::new();
        state.toggle_delivery();
        let items = render_list(&records, &state, &content(Language::English).list);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name.as_deref(), Some("A"));
        assert_eq!(items[0].call_to_action.as_ref().unwrap().href, "https://a.com");
    }
}
