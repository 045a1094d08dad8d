use crate::core::geo::LatLng;

/// The marker a popup is currently anchored to
#[derive(Debug, Clone, PartialEq)]
pub struct PopupAnchor {
    pub marker_id: String,
    pub position: LatLng,
}

/// A single shared detail overlay.
///
/// One instance is created at setup and reused across markers: each click
/// overwrites the content and moves the anchor. No marker owns the popup.
#[derive(Debug, Clone, Default)]
pub struct DetailPopup {
    content: String,
    anchor: Option<PopupAnchor>,
    open: bool,
}

impl DetailPopup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the displayed text
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Opens the popup anchored to the given marker
    pub fn open_at(&mut self, marker_id: impl Into<String>, position: LatLng) {
        self.anchor = Some(PopupAnchor {
            marker_id: marker_id.into(),
            position,
        });
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn anchor(&self) -> Option<&PopupAnchor> {
        self.anchor.as_ref()
    }

    /// Renders the popup at a screen position; clicking it closes it
    #[cfg(feature = "egui")]
    pub fn render_at_screen_pos(
        &mut self,
        ui: &mut egui::Ui,
        screen_pos: egui::Pos2,
    ) -> egui::Response {
        use egui::{Color32, FontId, Rect, Sense, Vec2};

        if !self.open {
            return ui.allocate_response(Vec2::ZERO, Sense::hover());
        }

        let font_id = FontId::proportional(12.0);
        let padding = 8.0;

        let text_size = ui
            .fonts(|f| f.layout_no_wrap(self.content.clone(), font_id.clone(), Color32::BLACK))
            .size();

        let popup_size = Vec2::new(
            (text_size.x + padding * 2.0).min(300.0),
            (text_size.y + padding * 2.0).min(200.0),
        );

        let popup_rect = Rect::from_min_size(screen_pos, popup_size);

        ui.painter().rect_filled(popup_rect, 4.0, Color32::WHITE);
        ui.painter()
            .rect_stroke(popup_rect, 4.0, (1.0, Color32::GRAY));

        let text_rect = popup_rect.shrink(padding);
        ui.painter().text(
            text_rect.min,
            egui::Align2::LEFT_TOP,
            &self.content,
            font_id,
            Color32::BLACK,
        );

        let response = ui.allocate_rect(popup_rect, Sense::click());
        if response.clicked() {
            self.close();
        }

        response
    }
}
