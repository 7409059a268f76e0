use super::PresenterApp;
use eframe::egui::Vec2;

/// Aspect-preserving fit of the slide design space into the viewport:
/// `1 / max(content_w / viewport_w, content_h / viewport_h)`. Scales above
/// 1.0 on viewports larger than the design space.
pub fn fit_scale(content: Vec2, viewport: Vec2) -> f32 {
    if content.x <= 0.0 || content.y <= 0.0 || viewport.x <= 0.0 || viewport.y <= 0.0 {
        return 1.0;
    }
    let overflow = (content.x / viewport.x).max(content.y / viewport.y);
    1.0 / overflow
}

impl PresenterApp {
    /// Recomputed from the live viewport every frame; resizes take effect
    /// immediately, nothing is cached.
    pub fn slide_scale(&self, viewport: Vec2) -> f32 {
        fit_scale(self.settings.design_size(), viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_limited_viewport() {
        // 1024x768 content in a 512x768 viewport: width is the tighter fit
        let scale = fit_scale(Vec2::new(1024.0, 768.0), Vec2::new(512.0, 768.0));
        assert!((scale - 0.5).abs() < 1e-6);
    }

    #[test]
    fn height_limited_viewport() {
        let scale = fit_scale(Vec2::new(1024.0, 768.0), Vec2::new(1024.0, 384.0));
        assert!((scale - 0.5).abs() < 1e-6);
    }

    #[test]
    fn scales_up_on_large_viewports() {
        let scale = fit_scale(Vec2::new(1024.0, 768.0), Vec2::new(2048.0, 2048.0));
        assert!((scale - 2.0).abs() < 1e-6);
    }

    #[test]
    fn preserves_aspect() {
        let content = Vec2::new(1024.0, 768.0);
        let viewport = Vec2::new(1300.0, 700.0);
        let scale = fit_scale(content, viewport);
        assert!(content.x * scale <= viewport.x + 1e-3);
        assert!(content.y * scale <= viewport.y + 1e-3);
        // One axis is tight
        let fits_x = (content.x * scale - viewport.x).abs() < 1e-3;
        let fits_y = (content.y * scale - viewport.y).abs() < 1e-3;
        assert!(fits_x || fits_y);
    }

    #[test]
    fn degenerate_viewport_is_identity() {
        assert_eq!(fit_scale(Vec2::new(1024.0, 768.0), Vec2::ZERO), 1.0);
    }
}
