//! A live, region-filtered view over the catalogue.
//!
//! With no region selected (the empty string) the view shows nothing.
//! The catalogue never holds an empty region key, so the sentinel can
//! not match a row.

use super::catalogue::Catalogue;
use super::types::{ZoneRecord, ZoneRow};
use crate::signal::{Signal, SubscriptionId};

pub struct RegionFilterView<'a> {
    catalogue: &'a Catalogue,
    region: String,
    /// Catalogue row indices of the visible entries, in catalogue order.
    visible: Vec<usize>,
    region_changed: Signal<str>,
}

impl<'a> RegionFilterView<'a> {
    /// A view with no region selected.
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self {
            catalogue,
            region: String::new(),
            visible: Vec::new(),
            region_changed: Signal::new(),
        }
    }

    /// A view starting on `region`. No notification is emitted.
    pub fn with_region(catalogue: &'a Catalogue, region: &str) -> Self {
        let mut view = Self::new(catalogue);
        view.region = region.to_string();
        view.refilter();
        view
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Switch region. Returns true, and notifies subscribers, only if the
    /// region actually changed.
    pub fn set_region(&mut self, region: &str) -> bool {
        if self.region == region {
            return false;
        }
        self.region = region.to_string();
        self.refilter();
        tracing::debug!(region = %self.region, visible = self.visible.len(), "region filter changed");
        self.region_changed.emit(region);
        true
    }

    /// Register a callback receiving the new region on each change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&str) + 'static,
    {
        self.region_changed.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.region_changed.unsubscribe(id)
    }

    /// Entries of the current region, in catalogue order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &'a ZoneRecord> + '_ {
        let catalogue = self.catalogue;
        self.visible.iter().filter_map(move |&i| catalogue.get(i))
    }

    pub fn rows(&self) -> Vec<ZoneRow> {
        self.visible_entries().map(ZoneRow::from).collect()
    }

    /// The `n`th visible row, if any.
    pub fn row(&self, n: usize) -> Option<ZoneRow> {
        let i = *self.visible.get(n)?;
        self.catalogue.get(i).map(ZoneRow::from)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    fn refilter(&mut self) {
        let region = self.region.as_str();
        self.visible = self
            .catalogue
            .iter()
            .enumerate()
            .filter(|(_, r)| r.region() == region)
            .map(|(i, _)| i)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn catalogue() -> Catalogue {
        Catalogue::build(vec![
            ZoneRecord::new("R1", "z1", "XX", 1.0, 1.0),
            ZoneRecord::new("R2", "z2", "XX", 2.0, 2.0),
            ZoneRecord::new("R1", "z3", "XX", 3.0, 3.0),
        ])
        .unwrap()
    }

    fn zones(view: &RegionFilterView<'_>) -> Vec<String> {
        view.visible_entries().map(|r| r.zone().to_string()).collect()
    }

    #[test]
    fn test_default_shows_nothing() {
        let cat = catalogue();
        let view = RegionFilterView::new(&cat);
        assert_eq!(view.region(), "");
        assert!(view.is_empty());
        assert_eq!(view.visible_entries().count(), 0);
    }

    #[test]
    fn test_filter_in_catalogue_order() {
        let cat = catalogue();
        let mut view = RegionFilterView::new(&cat);
        view.set_region("R1");
        assert_eq!(zones(&view), vec!["z1", "z3"]);
    }

    #[test]
    fn test_notifies_only_on_change() {
        let cat = catalogue();
        let mut view = RegionFilterView::new(&cat);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        view.subscribe(move |r: &str| s.borrow_mut().push(r.to_string()));

        assert!(view.set_region("R1"));
        // Same value: no-op, unlike the storage bus which always notifies.
        assert!(!view.set_region("R1"));
        assert!(view.set_region("R2"));

        assert_eq!(*seen.borrow(), vec!["R1", "R2"]);
        assert_eq!(zones(&view), vec!["z2"]);
    }

    #[test]
    fn test_unknown_region_is_empty() {
        let cat = catalogue();
        let view = RegionFilterView::with_region(&cat, "Nowhere");
        assert!(view.is_empty());
        assert!(view.row(0).is_none());
    }

    #[test]
    fn test_clearing_region() {
        let cat = catalogue();
        let mut view = RegionFilterView::with_region(&cat, "R1");
        assert_eq!(view.len(), 2);
        assert!(view.set_region(""));
        assert!(view.is_empty());
    }

    #[test]
    fn test_unsubscribed_observer_not_called() {
        let cat = catalogue();
        let mut view = RegionFilterView::new(&cat);
        let hits = Rc::new(RefCell::new(0));
        let h = Rc::clone(&hits);
        let id = view.subscribe(move |_: &str| *h.borrow_mut() += 1);
        assert!(view.unsubscribe(id));
        view.set_region("R2");
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn test_row_keys_round_trip() {
        let cat = Catalogue::builtin().unwrap();
        let view = RegionFilterView::with_region(&cat, "America");
        assert!(!view.is_empty());
        for row in view.rows() {
            let found = cat.find_exact(&row.region, &row.key).unwrap();
            assert_eq!(found.display_text(), row.name);
        }
        assert_eq!(view.row(0).unwrap().key, "Adak");
    }

    #[test]
    fn test_scenario_europe() {
        let cat = Catalogue::build(vec![
            ZoneRecord::new("Europe", "Berlin", "DE", 52.52, 13.40),
            ZoneRecord::new("Europe", "Paris", "FR", 48.85, 2.35),
            ZoneRecord::new("America", "New_York", "US", 40.71, -74.00),
        ])
        .unwrap();
        let view = RegionFilterView::with_region(&cat, "Europe");
        assert_eq!(zones(&view), vec!["Berlin", "Paris"]);
    }
}
