use serde::Serialize;

use industrialerp_core::{DomainError, Summarize};
use industrialerp_purchasing::{PurchaseOrder, PurchaseSummary};

use super::{Listing, StatCard, count};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchasesView {
    pub summary: PurchaseSummary,
    pub listing: Listing<PurchaseOrder>,
}

impl PurchasesView {
    pub fn build(
        orders: &[PurchaseOrder],
        search: &str,
        filter: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            summary: PurchaseOrder::summarize(orders),
            listing: Listing::build(orders, search, filter)?,
        })
    }

    pub fn cards(&self) -> Vec<StatCard> {
        let s = &self.summary;
        vec![
            StatCard::new("Total Órdenes", count(s.total_orders), "este mes"),
            StatCard::new("Pendientes", count(s.pending), "por aprobar"),
            StatCard::new("En Tránsito", count(s.in_transit), "en camino"),
            StatCard::new("Monto Total", s.total_amount, "del mes"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use industrialerp_core::Money;
    use industrialerp_infra::{InMemoryRecordStore, RecordStore};

    #[test]
    fn summary_ignores_the_filter() {
        let store = InMemoryRecordStore::sample().unwrap();
        let view = PurchasesView::build(store.list_purchase_orders(), "zzz", None).unwrap();

        assert!(view.listing.is_empty());
        assert_eq!(view.summary.total_orders, 4);
        assert_eq!(view.summary.total_amount, Money::from_units(91_950));

        let cards = view.cards();
        assert_eq!(cards[3].value, "$91,950");
        assert_eq!(cards[1].value, "1");
    }

    #[test]
    fn supplier_search_is_case_insensitive() {
        let store = InMemoryRecordStore::sample().unwrap();
        let view = PurchasesView::build(store.list_purchase_orders(), "SENSORES", None).unwrap();
        let ids: Vec<_> = view.listing.rows.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["PO-004"]);
    }
}
