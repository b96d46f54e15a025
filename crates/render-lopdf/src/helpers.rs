//! Translation of page draw lists into PDF content streams and annotation
//! dictionaries.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, StringFormat, dictionary};
use vita_layout::FontId;
use vita_render_core::{Circle, DrawOp, LineSegment, LinkAnnotation, Page, TextRun};
use vita_types::Color;

/// Bézier control-point distance for approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Resource name of a face in the shared font dictionary.
pub fn font_resource_name(font: FontId) -> &'static str {
    match font {
        FontId::Regular => "F1",
        FontId::Bold => "F2",
    }
}

pub fn render_page_to_content(page: &Page) -> Content {
    let mut ctx = PageContext::new();
    for op in page.ops() {
        ctx.draw(op);
    }
    ctx.finish()
}

/// Builds the `/Annot` dictionary for an external link. The action is inlined.
pub fn link_annotation_dict(link: &LinkAnnotation) -> Dictionary {
    let action = dictionary! {
        "Type" => "Action",
        "S" => "URI",
        "URI" => Object::String(link.uri.as_str().as_bytes().to_vec(), StringFormat::Literal),
    };
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => link.rect.to_array().iter().map(|v| Object::Real(*v)).collect::<Vec<Object>>(),
        "Border" => vec![0.into(), 0.into(), 0.into()],
        "A" => action,
    }
}

#[derive(Default)]
struct RenderState {
    font: Option<(FontId, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

struct PageContext {
    content: Content,
    state: RenderState,
}

impl PageContext {
    fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            state: RenderState::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Text(run) => self.draw_text(run),
            DrawOp::Line(line) => self.draw_line(line),
            DrawOp::Circle(circle) => self.draw_circle(circle),
        }
    }

    fn set_font(&mut self, font: FontId, size: f32) {
        if self.state.font != Some((font, size)) {
            self.push(
                "Tf",
                vec![Object::Name(font_resource_name(font).as_bytes().to_vec()), size.into()],
            );
            self.state.font = Some((font, size));
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.push("rg", color_operands(color));
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke_color != Some(color) {
            self.push("RG", color_operands(color));
            self.state.stroke_color = Some(color);
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn draw_text(&mut self, run: &TextRun) {
        if run.text.trim().is_empty() {
            return;
        }
        self.set_fill_color(run.color);
        self.push("BT", vec![]);
        self.set_font(run.font, run.size);
        self.push("Td", vec![run.x.into(), run.y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&run.text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn draw_line(&mut self, line: &LineSegment) {
        self.set_line_width(line.width);
        self.set_stroke_color(line.color);
        self.push("m", vec![line.from.x.into(), line.from.y.into()]);
        self.push("l", vec![line.to.x.into(), line.to.y.into()]);
        self.push("S", vec![]);
    }

    fn draw_circle(&mut self, circle: &Circle) {
        self.set_fill_color(circle.color);
        let (cx, cy, r) = (circle.center.x, circle.center.y, circle.radius);
        let k = KAPPA * r;
        self.push("m", vec![(cx + r).into(), cy.into()]);
        self.curve([cx + r, cy + k, cx + k, cy + r, cx, cy + r]);
        self.curve([cx - k, cy + r, cx - r, cy + k, cx - r, cy]);
        self.curve([cx - r, cy - k, cx - k, cy - r, cx, cy - r]);
        self.curve([cx + k, cy - r, cx + r, cy - k, cx + r, cy]);
        self.push("f", vec![]);
    }

    fn curve(&mut self, points: [f32; 6]) {
        self.push("c", points.iter().map(|v| Object::Real(*v)).collect());
    }
}

fn color_operands(color: Color) -> Vec<Object> {
    color.components().iter().map(|c| Object::Real(*c)).collect()
}

/// Encodes text for a WinAnsiEncoding font. Characters outside the code page
/// become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
