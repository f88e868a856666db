//! Drawing backend wrapper that keeps rendering when no font can be loaded.
//!
//! Shapes go straight to the wrapped backend. Text that fails to lay out,
//! by error or by panic inside the font loader, is measured approximately
//! and left out of the image, so a host without system fonts still gets
//! complete charts minus their labels.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
};

/// Width of an average glyph relative to the font size, as a fraction.
const GLYPH_ASPECT: (f64, f64) = (3.0, 5.0);

pub struct FontSafeBackend<DB> {
    inner: DB,
    warned: Cell<bool>,
}

impl<DB> FontSafeBackend<DB> {
    pub const fn new(inner: DB) -> Self {
        Self {
            inner,
            warned: Cell::new(false),
        }
    }

    fn note_missing_font(&self, text: &str) {
        if !self.warned.replace(true) {
            tracing::warn!(text, "font unavailable, chart text is left out");
        }
    }
}

/// Size of `text` assuming fixed-width glyphs.
#[must_use]
pub fn approximate_text_size(text: &str, font_size: f64) -> (u32, u32) {
    #[allow(clippy::cast_precision_loss)]
    let width = text.chars().count() as f64 * font_size * GLYPH_ASPECT.0 / GLYPH_ASPECT.1;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    (width.ceil() as u32, font_size.ceil() as u32)
}

impl<DB: DrawingBackend> DrawingBackend for FontSafeBackend<DB> {
    type ErrorType = DB::ErrorType;

    fn get_size(&self) -> (u32, u32) {
        self.inner.get_size()
    }

    fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.ensure_prepared()
    }

    fn present(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.present()
    }

    fn draw_pixel(
        &mut self,
        point: BackendCoord,
        color: BackendColor,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_pixel(point, color)
    }

    fn draw_line<S: BackendStyle>(
        &mut self,
        from: BackendCoord,
        to: BackendCoord,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_line(from, to, style)
    }

    fn draw_rect<S: BackendStyle>(
        &mut self,
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_rect(upper_left, bottom_right, style, fill)
    }

    fn draw_path<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        path: I,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_path(path, style)
    }

    fn draw_circle<S: BackendStyle>(
        &mut self,
        center: BackendCoord,
        radius: u32,
        style: &S,
        fill: bool,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_circle(center, radius, style, fill)
    }

    fn fill_polygon<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        vert: I,
        style: &S,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.fill_polygon(vert, style)
    }

    fn blit_bitmap(
        &mut self,
        pos: BackendCoord,
        (iw, ih): (u32, u32),
        src: &[u8],
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.blit_bitmap(pos, (iw, ih), src)
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: BackendCoord,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        let inner = &mut self.inner;
        match panic::catch_unwind(AssertUnwindSafe(|| inner.draw_text(text, style, pos))) {
            Ok(Err(DrawingErrorKind::FontError(_))) | Err(_) => {
                self.note_missing_font(text);
                Ok(())
            }
            Ok(result) => result,
        }
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        style: &TStyle,
    ) -> Result<(u32, u32), DrawingErrorKind<Self::ErrorType>> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.inner.estimate_text_size(text, style))) {
            Ok(Err(DrawingErrorKind::FontError(_))) | Err(_) => {
                self.note_missing_font(text);
                Ok(approximate_text_size(text, style.size()))
            }
            Ok(result) => result,
        }
    }
}
