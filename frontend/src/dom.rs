use showcase_shared::{ElementLookup, PageElement};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// A live DOM element seen through the shared `PageElement` interface.
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement(pub HtmlElement);

impl DomElement {
    pub fn from_element(element: web_sys::Element) -> Option<Self> {
        element.dyn_into::<HtmlElement>().ok().map(Self)
    }

    pub fn as_element(&self) -> &web_sys::Element {
        &self.0
    }
}

impl PageElement for DomElement {
    fn element_id(&self) -> Option<String> {
        let id = self.0.id();
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }

    fn href(&self) -> Option<String> {
        self.0.get_attribute("href")
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.0.class_list().toggle(class).unwrap_or_else(|_| self.has_class(class))
    }

    fn offset_top(&self) -> f64 {
        f64::from(self.0.offset_top())
    }

    fn offset_height(&self) -> f64 {
        f64::from(self.0.offset_height())
    }
}

/// Id lookups against the live document.
#[derive(Debug, Clone)]
pub struct DomDocument(pub Document);

impl DomDocument {
    pub fn element_by_id(&self, id: &str) -> Option<DomElement> {
        self.0
            .get_element_by_id(id)
            .and_then(DomElement::from_element)
    }

    /// All HTML elements matching `selector`, in document order. An invalid
    /// selector yields nothing.
    pub fn select_all(&self, selector: &str) -> Vec<DomElement> {
        let Ok(list) = self.0.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
            .collect()
    }
}

impl ElementLookup<DomElement> for DomDocument {
    fn find_by_id(&self, id: &str) -> Option<DomElement> {
        self.element_by_id(id)
    }
}
