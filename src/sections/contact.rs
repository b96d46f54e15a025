use super::{Section, SectionContext, page_mut};
use vita_layout::config::{
    ACCENT, BODY_SIZE, BULLET_ADVANCE, CONTENT_WIDTH, GRAY, LINE_HEIGHT, MARGIN, SECTION_GAP,
};
use vita_render_core::primitives::{
    TextStyle, draw_bullet, draw_text, register_link, text_link_rect,
};
use vita_render_core::{Cursor, Document, RenderError, collapse_gap, ensure_space};
use vita_types::{CvData, LinkUri, PersonalInfo};

/// One contact detail: what is printed and where it links to.
#[derive(Debug, Clone, PartialEq)]
struct ContactItem {
    label: String,
    target: Option<LinkUri>,
}

/// Email, phone, location and web profiles, flowed on as many lines as
/// needed. Every item except the location is clickable.
pub struct Contact;

impl Section for Contact {
    fn name(&self) -> &'static str {
        "contact"
    }

    fn render(
        &self,
        doc: &mut Document,
        cursor: Cursor,
        cv: &CvData,
        ctx: &SectionContext<'_>,
    ) -> Result<Cursor, RenderError> {
        let items = cv.personal_info.as_ref().map(contact_items).unwrap_or_default();
        if items.is_empty() {
            log::debug!("Skipping contact info: nothing to show");
            return Ok(cursor);
        }

        let style = TextStyle::regular(BODY_SIZE, GRAY);
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        let rows = vita_layout::pack_tokens(
            &labels,
            CONTENT_WIDTH,
            BULLET_ADVANCE,
            ctx.fonts.get(style.font),
            style.size,
        );

        let mut cursor = cursor;
        let mut remaining = items.iter();
        for row in rows {
            cursor = ensure_space(doc, cursor, LINE_HEIGHT)?;
            let mut x = MARGIN;
            for (i, label) in row.into_iter().enumerate() {
                let page = page_mut(doc, &cursor)?;
                if i > 0 {
                    draw_bullet(page, x, cursor.y, style.size, ACCENT);
                    x += BULLET_ADVANCE;
                }
                draw_text(page, label, x, cursor.y, &style);
                let width = style.width_of(ctx.fonts, label);

                let target = remaining.next().and_then(|item| item.target.clone());
                if let Some(target) = target {
                    let rect = text_link_rect(x, cursor.y, width, style.size);
                    let link = register_link(doc, rect, target);
                    cursor.push_annotation(link);
                }
                x += width;
            }
            cursor.y -= LINE_HEIGHT;
        }
        Ok(collapse_gap(doc, cursor, SECTION_GAP))
    }
}

fn contact_items(info: &PersonalInfo) -> Vec<ContactItem> {
    let present = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let mut items = Vec::new();
    if let Some(email) = present(&info.email) {
        items.push(ContactItem {
            target: Some(LinkUri::mailto(&email)),
            label: email,
        });
    }
    if let Some(phone) = present(&info.phone) {
        items.push(ContactItem {
            target: Some(LinkUri::from(phone.as_str())),
            label: phone,
        });
    }
    if let Some(location) = present(&info.location) {
        items.push(ContactItem {
            label: location,
            target: None,
        });
    }
    for web in [&info.website, &info.github, &info.linkedin] {
        let Some(url) = present(web) else {
            continue;
        };
        let label = display_url(&url);
        if label.is_empty() {
            log::debug!("Skipping contact link '{}': nothing left to display", url);
            continue;
        }
        items.push(ContactItem {
            label: label.to_string(),
            target: Some(LinkUri::from(url)),
        });
    }
    items
}

/// Drops the `http(s)://` scheme and a leading `www.` for display.
fn display_url(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.strip_prefix("www.").unwrap_or(rest)
}
