//! Attachment preview - shows a bill's proof in an overlay without leaving the page.

use tracing::debug;

/// Overlay the preview is rendered into.
pub trait Modal {
    /// Current width of the overlay in pixels.
    fn width(&self) -> u32;
    /// Replaces the overlay's body.
    fn set_content(&mut self, html: &str);
    /// Makes the overlay visible.
    fn show(&mut self);
}

/// Reveals attachments in a [`Modal`].
pub struct AttachmentPreview<M> {
    modal: M,
}

impl<M: Modal> AttachmentPreview<M> {
    pub const fn new(modal: M) -> Self {
        Self { modal }
    }

    /// Puts the image at `attachment_url` in the overlay and shows it.
    pub fn reveal(&mut self, attachment_url: &str) {
        let image_width = self.modal.width() / 2;
        debug!("Previewing {attachment_url} at {image_width}px");
        self.modal.set_content(&format!(
            "<div style='text-align: center;' class=\"bill-proof-container\">\
             <img width={image_width} src={attachment_url} alt=\"Bill\" /></div>"
        ));
        self.modal.show();
    }

    #[must_use]
    pub const fn modal(&self) -> &M {
        &self.modal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeModal;

    #[test]
    fn test_reveal_sets_content_and_shows_once() {
        let mut preview = AttachmentPreview::new(FakeModal::with_width(800));

        preview.reveal("url-to-bill");

        let modal = preview.modal();
        assert!(modal.content.contains("url-to-bill"));
        assert!(modal.content.contains("width=400"));
        assert_eq!(modal.show_calls, 1);
    }

    #[test]
    fn test_odd_width_is_floored() {
        let mut preview = AttachmentPreview::new(FakeModal::with_width(501));
        preview.reveal("url-to-bill");
        assert!(preview.modal().content.contains("width=250 "));
    }
}
