//! Minimal PDF 1.4 writer: A4 pages, base-14 Helvetica, filled/stroked
//! rectangles and single-line text. Coordinates are millimetres from the
//! top-left corner.

use std::fmt::Write as _;

pub(crate) const PAGE_WIDTH_MM: f64 = 210.0;
pub(crate) const PAGE_HEIGHT_MM: f64 = 297.0;
const PT_PER_MM: f64 = 72.0 / 25.4;
const BOTTOM_MARGIN_MM: f64 = 15.0;

/// Glyph widths (1/1000 em) for WinAnsi 0x20..=0x7E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, //
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, //
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, //
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, //
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(&self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            Self::Regular => &HELVETICA_WIDTHS,
            Self::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub(crate) const BLACK: Rgb = Rgb(0, 0, 0);
    pub(crate) const WHITE: Rgb = Rgb(255, 255, 255);

    fn components(&self) -> String {
        format!(
            "{:.3} {:.3} {:.3}",
            f64::from(self.0) / 255.0,
            f64::from(self.1) / 255.0,
            f64::from(self.2) / 255.0
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TextStyle {
    pub(crate) size: f64,
    pub(crate) font: Font,
    pub(crate) color: Rgb,
    pub(crate) align: Align,
}

impl TextStyle {
    pub(crate) fn new(size: f64) -> Self {
        Self {
            size,
            font: Font::Regular,
            color: Rgb::BLACK,
            align: Align::Left,
        }
    }

    pub(crate) fn bold(mut self) -> Self {
        self.font = Font::Bold;
        self
    }

    pub(crate) fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// Map to the WinAnsi printable subset; anything else becomes `?`.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if (' '..='~').contains(&c) { c } else { '?' })
        .collect()
}

/// Rendered width of `text` in millimetres.
pub(crate) fn text_width_mm(text: &str, size: f64, font: Font) -> f64 {
    let widths = font.widths();
    let units: u32 = sanitize(text)
        .bytes()
        .map(|b| u32::from(widths[usize::from(b - b' ')]))
        .sum();
    f64::from(units) / 1000.0 * size / PT_PER_MM
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in sanitize(text).chars() {
        if matches!(c, '(' | ')' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Default)]
pub(crate) struct Page {
    content: String,
}

impl Page {
    pub(crate) fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        let _ = writeln!(
            self.content,
            "{} rg {:.2} {:.2} {:.2} {:.2} re f",
            color.components(),
            x * PT_PER_MM,
            (PAGE_HEIGHT_MM - y - h) * PT_PER_MM,
            w * PT_PER_MM,
            h * PT_PER_MM
        );
    }

    pub(crate) fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        let _ = writeln!(
            self.content,
            "{} RG 0.5 w {:.2} {:.2} {:.2} {:.2} re S",
            color.components(),
            x * PT_PER_MM,
            (PAGE_HEIGHT_MM - y - h) * PT_PER_MM,
            w * PT_PER_MM,
            h * PT_PER_MM
        );
    }

    /// Draw `text` with its baseline at `y`; `x` is the left edge, centre or
    /// right edge depending on `style.align`.
    pub(crate) fn text(&mut self, x: f64, y: f64, text: &str, style: TextStyle) {
        let width = text_width_mm(text, style.size, style.font);
        let left = match style.align {
            Align::Left => x,
            Align::Center => x - width / 2.0,
        };
        let _ = writeln!(
            self.content,
            "BT /{} {:.1} Tf {} rg {:.2} {:.2} Td ({}) Tj ET",
            style.font.resource(),
            style.size,
            style.color.components(),
            left * PT_PER_MM,
            (PAGE_HEIGHT_MM - y) * PT_PER_MM,
            escape(text)
        );
    }
}

#[derive(Debug, Default)]
pub(crate) struct PdfDocument {
    pages: Vec<Page>,
}

impl PdfDocument {
    pub(crate) fn new() -> Self {
        Self { pages: vec![Page::default()] }
    }

    pub(crate) fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub(crate) fn add_page(&mut self) -> &mut Page {
        self.pages.push(Page::default());
        self.current()
    }

    pub(crate) fn current(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        let page_obj = |i: usize| 5 + 2 * i;
        let kids = (0..self.pages.len())
            .map(|i| format!("{} 0 R", page_obj(i)))
            .collect::<Vec<_>>()
            .join(" ");

        let mut objects: Vec<Vec<u8>> = vec![
            b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
            format!("<< /Type /Pages /Kids [{kids}] /Count {} >>", self.pages.len()).into_bytes(),
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_vec(),
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
                .to_vec(),
        ];
        for (i, page) in self.pages.iter().enumerate() {
            objects.push(
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                    PAGE_WIDTH_MM * PT_PER_MM,
                    PAGE_HEIGHT_MM * PT_PER_MM,
                    page_obj(i) + 1
                )
                .into_bytes(),
            );
            let mut stream =
                format!("<< /Length {} >>\nstream\n", page.content.len()).into_bytes();
            stream.extend_from_slice(page.content.as_bytes());
            stream.extend_from_slice(b"\nendstream");
            objects.push(stream);
        }

        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_at = out.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in &offsets {
            let _ = writeln!(xref, "{offset:010} 00000 n ");
        }
        let _ = write!(
            xref,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        );
        out.extend_from_slice(xref.as_bytes());
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TableTheme {
    /// Alternating row shading, no borders.
    Striped,
    /// Every cell outlined.
    Grid,
}

pub(crate) struct Table<'a> {
    pub(crate) head: &'a [&'a str],
    pub(crate) rows: Vec<Vec<String>>,
    /// Column widths in millimetres.
    pub(crate) widths: &'a [f64],
    pub(crate) font_size: f64,
    pub(crate) theme: TableTheme,
    pub(crate) head_fill: Rgb,
}

const STRIPE_FILL: Rgb = Rgb(245, 245, 245);
const GRID_LINE: Rgb = Rgb(200, 200, 200);
const TABLE_LEFT_MM: f64 = 14.0;

impl Table<'_> {
    fn row_height(&self) -> f64 {
        self.font_size * 0.7
    }

    fn draw_row(&self, page: &mut Page, y: f64, cells: &[String], header: bool, index: usize) {
        let h = self.row_height();
        let total: f64 = self.widths.iter().sum();
        if header {
            page.fill_rect(TABLE_LEFT_MM, y, total, h, self.head_fill);
        } else if self.theme == TableTheme::Striped && index % 2 == 1 {
            page.fill_rect(TABLE_LEFT_MM, y, total, h, STRIPE_FILL);
        }

        let mut x = TABLE_LEFT_MM;
        for (col, width) in self.widths.iter().enumerate() {
            if self.theme == TableTheme::Grid {
                page.stroke_rect(x, y, *width, h, GRID_LINE);
            }
            let text = cells.get(col).map(String::as_str).unwrap_or("");
            let style = if header {
                TextStyle::new(self.font_size).bold().color(Rgb::WHITE)
            } else {
                TextStyle::new(self.font_size)
            };
            page.text(x + 1.8, y + h * 0.68, text, style);
            x += width;
        }
    }

    /// Draw the table from `start_y`, continuing on new pages (with the header
    /// repeated) when it runs past the bottom margin. Returns the final y.
    pub(crate) fn draw(&self, doc: &mut PdfDocument, start_y: f64) -> f64 {
        let h = self.row_height();
        let head: Vec<String> = self.head.iter().map(|s| s.to_string()).collect();
        let mut y = start_y;

        self.draw_row(doc.current(), y, &head, true, 0);
        y += h;

        for (i, row) in self.rows.iter().enumerate() {
            if y + h > PAGE_HEIGHT_MM - BOTTOM_MARGIN_MM {
                doc.add_page();
                y = BOTTOM_MARGIN_MM;
                self.draw_row(doc.current(), y, &head, true, 0);
                y += h;
            }
            self.draw_row(doc.current(), y, row, false, i);
            y += h;
        }
        y
    }
}
