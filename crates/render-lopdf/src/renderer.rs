use crate::helpers;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use report_layout::{Document as LaidOutDocument, FontWeight, Page};
use report_render_core::utils::{base_font_name, font_resource_name, to_win_ansi};
use report_render_core::{DocumentRenderer, RenderError};

/// An in-memory PDF renderer using the `lopdf` library.
/// It builds the document's object graph and then serializes it in one go.
#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    version: String,
    title: Option<String>,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        Self {
            version: "1.7".to_string(),
            title: None,
        }
    }

    /// Sets the `/Title` entry of the document information dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn render(&self, source: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        let mut document = Document::with_version(self.version.as_str());
        let pages_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        for weight in [FontWeight::Regular, FontWeight::Bold] {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base_font_name(weight),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font_resource_name(weight), font_id);
        }

        let size = source.page_size();
        let media_box: Vec<Object> = vec![0.0f32.into(), 0.0f32.into(), size.width.into(), size.height.into()];

        let mut page_ids: Vec<Object> = Vec::with_capacity(source.page_count());
        for page in source.pages() {
            let page_id = write_page(&mut document, page, pages_id, &font_dict, &media_box)?;
            page_ids.push(page_id.into());
        }

        let count = page_ids.len() as i64;
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids,
                "Count" => count,
            }),
        );

        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);

        if let Some(title) = &self.title {
            let info_id = document.add_object(dictionary! {
                "Title" => Object::String(to_win_ansi(title), StringFormat::Literal),
            });
            document.trailer.set("Info", info_id);
        }

        let mut buffer = Vec::new();
        document.save_to(&mut buffer)?;
        log::debug!("Serialized {} page(s) into {} bytes", count, buffer.len());
        Ok(buffer)
    }
}

fn write_page(
    document: &mut Document,
    page: &Page,
    pages_id: ObjectId,
    fonts: &Dictionary,
    media_box: &[Object],
) -> Result<ObjectId, RenderError> {
    let mut resources = dictionary! { "Font" => fonts.clone() };

    let mut xobjects = Dictionary::new();
    for (i, image) in page.images().enumerate() {
        let stream = helpers::image_xobject(&image.data)?;
        let image_id = document.add_object(stream);
        xobjects.set(helpers::image_resource_name(i), image_id);
    }
    if !xobjects.is_empty() {
        resources.set("XObject", xobjects);
    }

    let content = helpers::render_page_content(page);
    let compressed = helpers::compress(&content.encode()?)?;
    let content_id = document.add_object(Stream::new(dictionary! {"Filter" => "FlateDecode"}, compressed));

    Ok(document.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => media_box.to_vec(),
        "Contents" => content_id,
        "Resources" => resources,
    }))
}
