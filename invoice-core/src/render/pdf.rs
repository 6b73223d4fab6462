//! PDF emission.
//!
//! Walks a laid-out page and turns each element into printpdf operations.
//! All geometry decisions were already made by the layout pass; this pass
//! only converts points to millimetres and picks the font face per style.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage};
use printpdf::{
    Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Line, Mm, PdfDocument,
    PdfLayerReference, Point, Pt, Px, Rgb,
};
use thiserror::Error;
use tracing::debug;

use crate::models::{DraftError, InvoiceDraft};
use crate::render::fonts::InvoiceFonts;
use crate::render::layout::{Element, InvoiceLayout, PAGE_HEIGHT, PAGE_WIDTH, TextStyle, layout_invoice};
use crate::render::metrics::TtfMetrics;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    InvalidDraft(#[from] DraftError),

    #[error("pdf generation failed: {0}")]
    Pdf(String),
}

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("cannot read logo image '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode logo image '{path}': {message}")]
    Decode { path: PathBuf, message: String },
}

/// Header logo, decoded once at startup.
pub struct Logo {
    image: DynamicImage,
}

impl Logo {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Reads and decodes an image file.
    ///
    /// # Errors
    ///
    /// [`LogoError::Io`] when the file cannot be read, [`LogoError::Decode`]
    /// when the bytes are not a decodable image.
    pub fn open(path: &Path) -> Result<Self, LogoError> {
        let bytes = fs::read(path).map_err(|source| LogoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let image = image::load_from_memory(&bytes).map_err(|e| LogoError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "logo decoded");
        Ok(Self::new(image))
    }

    /// Flattens transparency against a white page background; PDF image
    /// XObjects carry no alpha channel here.
    fn composited_rgb(&self) -> RgbImage {
        let rgba = self.image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut rgb = RgbImage::new(width, height);
        for (x, y, pixel) in rgba.enumerate_pixels() {
            let image::Rgba([r, g, b, a]) = *pixel;
            let alpha = f32::from(a) / 255.0;
            let blend = |channel: u8| (f32::from(channel) * alpha + 255.0 * (1.0 - alpha)) as u8;
            rgb.put_pixel(x, y, image::Rgb([blend(r), blend(g), blend(b)]));
        }
        rgb
    }
}

/// Renders the draft into a complete PDF document.
///
/// The caller is expected to have validated the draft already; the check
/// is repeated here so an unvalidated call can never produce output.
///
/// # Errors
///
/// [`RenderError::InvalidDraft`] when the draft fails its presence checks,
/// [`RenderError::Pdf`] when document assembly fails.
pub fn render_invoice(
    draft: &InvoiceDraft,
    fonts: &InvoiceFonts,
    logo: Option<&Logo>,
) -> Result<Vec<u8>, RenderError> {
    draft.validate()?;

    let metrics = TtfMetrics::new(&fonts.regular);
    let layout = layout_invoice(draft, logo.is_some(), &metrics);
    emit_document(&layout, fonts, logo)
}

fn emit_document(
    layout: &InvoiceLayout,
    fonts: &InvoiceFonts,
    logo: Option<&Logo>,
) -> Result<Vec<u8>, RenderError> {
    let (doc, page, layer) = PdfDocument::new(
        "Tutoring Invoice",
        mm(PAGE_WIDTH),
        mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let regular = doc
        .add_external_font(fonts.regular_bytes.as_slice())
        .map_err(pdf_err)?;
    let bold = doc
        .add_external_font(fonts.bold_bytes.as_slice())
        .map_err(pdf_err)?;

    for element in &layout.elements {
        match element {
            Element::Text {
                x,
                y,
                style,
                content,
            } => {
                if *style == TextStyle::Footer {
                    layer.set_fill_color(Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None)));
                }
                let font = if style.is_bold() { &bold } else { &regular };
                layer.use_text(content.clone(), style.size(), mm(*x), mm(*y), font);
            }
            Element::Rule { from, to } => {
                layer.add_line(Line {
                    points: vec![
                        (Point::new(mm(from.0), mm(from.1)), false),
                        (Point::new(mm(to.0), mm(to.1)), false),
                    ],
                    is_closed: false,
                });
            }
            Element::Logo {
                x,
                y,
                max_width,
                max_height,
            } => {
                if let Some(logo) = logo {
                    embed_logo(&layer, logo, *x, *y, *max_width, *max_height);
                }
            }
        }
    }

    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes)).map_err(pdf_err)?;
    debug!(size = bytes.len(), "invoice document assembled");
    Ok(bytes)
}

/// Aspect-fits the logo into its box, anchored at the box's bottom-left
/// corner, and embeds it at the DPI that yields that physical size.
fn embed_logo(
    layer: &PdfLayerReference,
    logo: &Logo,
    x: f32,
    y: f32,
    max_width: f32,
    max_height: f32,
) {
    let rgb = logo.composited_rgb();
    let (width_px, height_px) = rgb.dimensions();

    let aspect = width_px as f32 / height_px as f32;
    let final_width = (max_height * aspect).min(max_width);

    let image = Image::from(ImageXObject {
        width: Px(width_px as usize),
        height: Px(height_px as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: rgb.into_raw(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });

    // dpi = pixels per inch at the requested physical width (72 pt/in).
    let dpi = width_px as f32 / (final_width / 72.0);
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(mm(x)),
            translate_y: Some(mm(y)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
}

fn mm(points: f32) -> Mm {
    Mm::from(Pt(points))
}

fn pdf_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Pdf(e.to_string())
}
