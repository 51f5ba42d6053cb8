//! Scrollspy: keeps exactly one nav link marked active for the section
//! sitting in the middle band of the viewport.
//!
//! The controller here knows nothing about the DOM. It is driven by batches of
//! [`Intersection`]s and writes through [`LinkMarker`]; the browser wiring
//! lives in [`dom`].

use std::collections::{HashMap, HashSet};

use log::debug;

pub mod dom;

/// Attribute set on the active nav link.
pub const ACTIVE_ATTR: &str = "data-active";
/// Band that counts as "being read": drops the top 40% and bottom 55%.
pub const ROOT_MARGIN: &str = "-40% 0px -55% 0px";
/// Fire as soon as any sliver of a section crosses the band edge.
pub const THRESHOLD: f64 = 0.01;

/// One entry of an observer batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection {
    pub id: String,
    pub is_intersecting: bool,
}

/// A page region the observer watches. Only links whose fragment matches a
/// registered section `id` can ever become active.
pub struct Section<T> {
    pub id: String,
    pub target: T,
}

/// Output side: something that can show or hide the active marker.
pub trait LinkMarker {
    fn set_active(&self, active: bool);
}

/// Input side: reports when watched sections cross the viewport band.
pub trait ViewportObserver {
    type Target;

    fn observe(&mut self, target: &Self::Target);
    fn disconnect(&mut self);
}

pub struct Scrollspy<L, O: ViewportObserver> {
    sections: Vec<Section<O::Target>>,
    links: Vec<L>,
    by_id: HashMap<String, usize>,
    observer: Option<O>,
}

/// Identifier a fragment href points at, if it is a local fragment.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

impl<L: LinkMarker, O: ViewportObserver> Scrollspy<L, O> {
    /// Builds both registries and starts observing every section in order.
    ///
    /// `links` are `(href, link)` pairs; hrefs that are not local fragments are
    /// dropped. If two links target the same id, the later one is used. Links
    /// pointing at no section are kept only so they get cleared.
    pub fn new<I>(sections: Vec<Section<O::Target>>, links: I, mut observer: O) -> Self
    where
        I: IntoIterator<Item = (String, L)>,
    {
        let mut registered = Vec::new();
        let mut by_id = HashMap::new();
        {
            let section_ids: HashSet<&str> = sections.iter().map(|s| s.id.as_str()).collect();
            for (href, link) in links {
                if let Some(id) = fragment_target(&href) {
                    if section_ids.contains(id) {
                        by_id.insert(id.to_string(), registered.len());
                    }
                    registered.push(link);
                }
            }
        }

        for section in &sections {
            observer.observe(&section.target);
        }

        debug!(
            "scrollspy watching {} sections with {} nav links",
            sections.len(),
            registered.len()
        );

        Self {
            sections,
            links: registered,
            by_id,
            observer: Some(observer),
        }
    }

    /// Applies one observer batch. The last entering section with a link wins.
    pub fn handle<I>(&self, batch: I)
    where
        I: IntoIterator<Item = Intersection>,
    {
        if !self.is_observing() {
            return;
        }
        for entry in batch {
            if !entry.is_intersecting {
                continue;
            }
            let Some(&index) = self.by_id.get(&entry.id) else {
                continue;
            };
            for link in &self.links {
                link.set_active(false);
            }
            self.links[index].set_active(true);
            debug!("scrollspy active section: {}", entry.id);
        }
    }

    /// Stops the observer. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
            debug!("scrollspy disconnected");
        }
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeLink {
        active: Rc<Cell<bool>>,
        writes: Rc<Cell<usize>>,
    }

    impl LinkMarker for FakeLink {
        fn set_active(&self, active: bool) {
            self.active.set(active);
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[derive(Clone, Default)]
    struct FakeObserver {
        observed: Rc<RefCell<Vec<String>>>,
        disconnects: Rc<Cell<usize>>,
    }

    impl ViewportObserver for FakeObserver {
        type Target = String;

        fn observe(&mut self, target: &String) {
            self.observed.borrow_mut().push(target.clone());
        }

        fn disconnect(&mut self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    impl Intersection {
        fn entering(id: &str) -> Self {
            Self { id: id.to_string(), is_intersecting: true }
        }

        fn leaving(id: &str) -> Self {
            Self { id: id.to_string(), is_intersecting: false }
        }
    }

    const PAGE: [&str; 4] = ["home", "services", "why", "contact"];

    struct Page {
        spy: Scrollspy<FakeLink, FakeObserver>,
        links: Vec<(String, FakeLink)>,
        observer: FakeObserver,
    }

    impl Page {
        fn with_hrefs(section_ids: &[&str], hrefs: &[&str]) -> Self {
            let sections: Vec<Section<String>> = section_ids
                .iter()
                .map(|id| Section { id: id.to_string(), target: id.to_string() })
                .collect();
            let links: Vec<(String, FakeLink)> = hrefs
                .iter()
                .map(|href| (href.to_string(), FakeLink::default()))
                .collect();
            let observer = FakeObserver::default();
            let spy = Scrollspy::new(sections, links.clone(), observer.clone());
            Page { spy, links, observer }
        }

        fn standard() -> Self {
            let hrefs: Vec<String> = PAGE.iter().map(|id| format!("#{id}")).collect();
            let hrefs: Vec<&str> = hrefs.iter().map(String::as_str).collect();
            Self::with_hrefs(&PAGE, &hrefs)
        }

        fn active(&self) -> Vec<&str> {
            self.links
                .iter()
                .filter(|(_, link)| link.active.get())
                .map(|(href, _)| href.as_str())
                .collect()
        }

        fn writes(&self) -> usize {
            self.links.iter().map(|(_, link)| link.writes.get()).sum()
        }
    }

    #[test]
    fn construction_observes_every_section_in_order() {
        let page = Page::standard();
        assert_eq!(*page.observer.observed.borrow(), PAGE.to_vec());
        assert_eq!(page.spy.section_ids().collect::<Vec<_>>(), PAGE.to_vec());
        assert!(page.spy.is_observing());
        assert_eq!(page.writes(), 0);
    }

    #[test]
    fn entering_section_marks_only_its_link() {
        let page = Page::standard();
        page.spy.handle([Intersection::entering("services")]);
        assert_eq!(page.active(), vec!["#services"]);
    }

    #[test]
    fn next_entering_section_moves_the_marker() {
        let page = Page::standard();
        page.spy.handle([Intersection::entering("services")]);
        // services is still intersecting when why enters
        page.spy.handle([Intersection::entering("why")]);
        assert_eq!(page.active(), vec!["#why"]);
    }

    #[test]
    fn last_entering_entry_in_a_batch_wins() {
        let page = Page::standard();
        page.spy.handle([Intersection::entering("why"), Intersection::entering("contact")]);
        assert_eq!(page.active(), vec!["#contact"]);
    }

    #[test]
    fn leaving_keeps_previous_marker() {
        let page = Page::standard();
        page.spy.handle([Intersection::entering("services")]);
        let writes = page.writes();
        page.spy.handle([Intersection::leaving("services")]);
        assert_eq!(page.active(), vec!["#services"]);
        assert_eq!(page.writes(), writes);
    }

    #[test]
    fn unknown_section_is_skipped() {
        let page = Page::standard();
        page.spy.handle([Intersection::entering("services")]);
        page.spy.handle([Intersection::entering("pricing")]);
        assert_eq!(page.active(), vec!["#services"]);
    }

    #[test]
    fn link_without_section_never_activates() {
        let page = Page::with_hrefs(&["home", "services"], &["#home", "#services", "#faq"]);
        for id in ["home", "services", "faq", "home"] {
            page.spy.handle([Intersection::entering(id)]);
            assert!(!page.active().contains(&"#faq"));
        }
        assert_eq!(page.active(), vec!["#home"]);
    }

    #[test]
    fn reported_id_without_section_keeps_current_marker() {
        let page = Page::with_hrefs(&["home", "services"], &["#home", "#services", "#faq"]);
        page.spy.handle([Intersection::entering("services")]);
        let writes = page.writes();
        page.spy.handle([Intersection::entering("faq")]);
        assert_eq!(page.active(), vec!["#services"]);
        assert_eq!(page.writes(), writes);
    }

    #[test]
    fn unmatched_link_is_still_cleared() {
        let page = Page::with_hrefs(&["home"], &["#home", "#faq"]);
        page.spy.handle([Intersection::entering("home")]);
        assert_eq!(page.links[1].1.writes.get(), 1);
        assert!(!page.links[1].1.active.get());
    }

    #[test]
    fn non_fragment_hrefs_are_not_registered() {
        let page = Page::with_hrefs(&["home"], &["/home", "https://example.com/#home", "#home"]);
        page.spy.handle([Intersection::entering("home")]);
        assert_eq!(page.active(), vec!["#home"]);
        assert_eq!(page.links[0].1.writes.get(), 0);
        assert_eq!(page.links[1].1.writes.get(), 0);
    }

    #[test]
    fn duplicate_target_uses_the_later_link() {
        let page = Page::with_hrefs(&["home"], &["#home", "#home"]);
        page.spy.handle([Intersection::entering("home")]);
        assert!(!page.links[0].1.active.get());
        assert!(page.links[1].1.active.get());
    }

    #[test]
    fn teardown_disconnects_once_and_silences_updates() {
        let mut page = Page::standard();
        page.spy.handle([Intersection::entering("home")]);
        page.spy.teardown();
        page.spy.teardown();
        assert_eq!(page.observer.disconnects.get(), 1);
        assert!(!page.spy.is_observing());

        let writes = page.writes();
        page.spy.handle([Intersection::entering("contact")]);
        assert_eq!(page.writes(), writes);
        assert_eq!(page.active(), vec!["#home"]);
    }

    #[test]
    fn empty_page_is_valid_and_inert() {
        let mut page = Page::with_hrefs(&[], &[]);
        page.spy.handle([Intersection::entering("home"), Intersection::leaving("why")]);
        assert!(page.observer.observed.borrow().is_empty());
        page.spy.teardown();
        assert_eq!(page.observer.disconnects.get(), 1);
    }

    fn batches() -> impl Strategy<Value = Vec<Vec<(usize, bool)>>> {
        prop::collection::vec(prop::collection::vec((0..6usize, any::<bool>()), 0..5), 0..20)
    }

    fn to_batch(entries: &[(usize, bool)]) -> Vec<Intersection> {
        const IDS: [&str; 6] = ["home", "services", "why", "contact", "faq", "pricing"];
        entries
            .iter()
            .map(|&(i, on)| Intersection { id: IDS[i].to_string(), is_intersecting: on })
            .collect()
    }

    proptest! {
        #[test]
        fn at_most_one_link_is_ever_active(batches in batches()) {
            let page = Page::with_hrefs(&PAGE, &["#home", "#services", "#why", "#contact", "#faq"]);
            for batch in &batches {
                page.spy.handle(to_batch(batch));
                prop_assert!(page.active().len() <= 1);
                prop_assert!(!page.active().contains(&"#faq"));
            }
        }

        #[test]
        fn marker_follows_last_registered_entering_entry(batches in batches()) {
            let page = Page::standard();
            let mut expected: Option<String> = None;
            for batch in &batches {
                let batch = to_batch(batch);
                if let Some(last) = batch
                    .iter()
                    .filter(|e| e.is_intersecting && PAGE.contains(&e.id.as_str()))
                    .last()
                {
                    expected = Some(format!("#{}", last.id));
                }
                page.spy.handle(batch);
            }
            let active: Vec<String> = page.active().into_iter().map(String::from).collect();
            prop_assert_eq!(active, expected.into_iter().collect::<Vec<_>>());
        }

        #[test]
        fn nothing_changes_after_teardown(before in batches(), after in batches()) {
            let mut page = Page::standard();
            for batch in &before {
                page.spy.handle(to_batch(batch));
            }
            page.spy.teardown();
            let writes = page.writes();
            for batch in &after {
                page.spy.handle(to_batch(batch));
            }
            prop_assert_eq!(page.writes(), writes);
        }
    }
}
