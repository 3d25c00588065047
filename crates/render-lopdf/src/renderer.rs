use crate::helpers;
use deckline_layout::{FontLibrary, SlideCanvas};
use deckline_render_core::utils::{alpha_state_name, font_resource_map};
use deckline_render_core::{DocumentInfo, DocumentRenderer, ImageAsset, RenderError};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Write;

/// An in-memory PDF renderer using the `lopdf` library.
///
/// Pages share one resources dictionary. It is filled in on `finish`, once
/// every font, image and opacity level the pages use is known.
pub struct LopdfRenderer<W: Write> {
    writer: Option<W>,
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    fonts: FontLibrary,
    font_map: HashMap<String, String>,
    font_ids: BTreeMap<String, ObjectId>,
    image_names: HashMap<String, String>,
    image_ids: BTreeMap<String, ObjectId>,
    alpha_states: BTreeSet<u8>,
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

impl<W: Write> LopdfRenderer<W> {
    pub fn new(fonts: FontLibrary) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        let font_map = font_resource_map(&fonts);

        Self {
            writer: None,
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            fonts,
            font_map,
            font_ids: BTreeMap::new(),
            image_names: HashMap::new(),
            image_ids: BTreeMap::new(),
            alpha_states: BTreeSet::new(),
        }
    }

    fn ensure_started(&self) -> Result<(), RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::Other("Document not started".into()));
        }
        Ok(())
    }

    fn build_resources(&self) -> Dictionary {
        let mut fonts = Dictionary::new();
        for (name, id) in &self.font_ids {
            fonts.set(name.as_bytes().to_vec(), *id);
        }

        let mut xobjects = Dictionary::new();
        for (name, id) in &self.image_ids {
            xobjects.set(name.as_bytes().to_vec(), *id);
        }

        let mut states = Dictionary::new();
        for percent in &self.alpha_states {
            let alpha = *percent as f32 / 100.0;
            states.set(
                alpha_state_name(*percent).into_bytes(),
                dictionary! { "Type" => "ExtGState", "ca" => alpha, "CA" => alpha },
            );
        }

        dictionary! {
            "Font" => fonts,
            "XObject" => xobjects,
            "ExtGState" => states,
        }
    }
}

impl<W: Write> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError> {
        for face in self.fonts.registered_fonts() {
            if let Some(internal_name) = self.font_map.get(&face.postscript_name) {
                let font_dict = dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => face.postscript_name.clone(),
                    "Encoding" => "WinAnsiEncoding",
                };
                let font_id = self.document.add_object(font_dict);
                self.font_ids.insert(internal_name.clone(), font_id);
            }
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![],
            "Count" => 0,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);

        let mut info_dict = dictionary! { "Title" => Object::string_literal(info.title.as_str()) };
        if let Some(author) = &info.author {
            info_dict.set("Author", Object::string_literal(author.as_str()));
        }
        if let Some(subject) = &info.subject {
            info_dict.set("Subject", Object::string_literal(subject.as_str()));
        }
        if let Some(creator) = &info.creator {
            info_dict.set("Creator", Object::string_literal(creator.as_str()));
        }
        let info_id = self.document.add_object(info_dict);
        self.document.trailer.set("Info", info_id);

        self.writer = Some(writer);
        Ok(())
    }

    fn register_image(&mut self, asset: &ImageAsset) -> Result<(), RenderError> {
        self.ensure_started()?;

        let mut image_dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => asset.width as i64,
            "Height" => asset.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        };
        if let Some(alpha) = &asset.alpha {
            let mask_dict = dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => asset.width as i64,
                "Height" => asset.height as i64,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            };
            let mask_id = self.document.add_object(Stream::new(mask_dict, deflate(alpha)?));
            image_dict.set("SMask", mask_id);
        }
        let image_id = self
            .document
            .add_object(Stream::new(image_dict, deflate(&asset.rgb)?));

        let name = match self.image_names.get(&asset.key) {
            Some(existing) => {
                log::debug!("Image '{}' registered again; replacing it", asset.key);
                existing.clone()
            }
            None => format!("Im{}", self.image_names.len() + 1),
        };
        self.image_ids.insert(name.clone(), image_id);
        self.image_names.insert(asset.key.clone(), name);
        Ok(())
    }

    fn render_page(&mut self, canvas: &SlideCanvas) -> Result<(), RenderError> {
        self.ensure_started()?;
        let page = helpers::render_canvas_to_content(
            canvas,
            &self.fonts,
            &self.font_map,
            &self.image_names,
        )?;
        self.alpha_states.extend(page.alpha_states);

        let compressed = deflate(&page.content.encode()?)?;
        let content_stream = Stream::new(dictionary! { "Filter" => "FlateDecode" }, compressed);
        let content_id = self.document.add_object(content_stream);

        let size = canvas.size();
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), size.width.into(), size.height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        log::debug!("Rendered page {} ({} commands)", self.page_ids.len(), canvas.commands().len());
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn finish(self: Box<Self>) -> Result<W, RenderError> {
        let mut renderer = *self;
        let Some(mut writer) = renderer.writer.take() else {
            return Err(RenderError::Other(
                "Document was never started with begin_document".into(),
            ));
        };

        let resources = renderer.build_resources();
        renderer
            .document
            .objects
            .insert(renderer.resources_id, Object::Dictionary(resources));

        if let Some(Object::Dictionary(pages_dict)) =
            renderer.document.objects.get_mut(&renderer.pages_id)
        {
            let kids: Vec<Object> = renderer.page_ids.iter().map(|id| Object::from(*id)).collect();
            pages_dict.set("Kids", kids);
            pages_dict.set("Count", renderer.page_ids.len() as i64);
        }

        renderer.document.save_to(&mut writer)?;
        Ok(writer)
    }
}
