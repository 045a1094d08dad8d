use crate::core::geo::LatLngBounds;

/// Fixed map regions a control can be placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Registration of a UI element in one of the map's control regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSlot {
    pub id: String,
    pub position: ControlPosition,
}

impl ControlSlot {
    pub fn new(id: impl Into<String>, position: ControlPosition) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

/// The text-input model behind the search control.
///
/// Holds the current query and the bias rectangle the controller keeps in
/// sync with the visible map area. Rendering lives behind the `egui`
/// feature; the model itself is UI-framework agnostic.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    query: String,
    bias: Option<LatLngBounds>,
    placeholder: String,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            bias: None,
            placeholder: "Search places...".to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The region search results should be biased towards
    pub fn bias(&self) -> Option<&LatLngBounds> {
        self.bias.as_ref()
    }

    pub fn set_bias(&mut self, bounds: LatLngBounds) {
        self.bias = Some(bounds);
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Renders the text input; returns true when the user submitted the query
    #[cfg(feature = "egui")]
    pub fn render(&mut self, ui: &mut egui::Ui) -> bool {
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.query)
                .hint_text(self.placeholder.clone())
                .desired_width(240.0),
        );

        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
    }
}
