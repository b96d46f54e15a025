use lopdf::content::Content;
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Buffers PDF objects and writes them out with a classic cross-reference
/// table on [`StreamingPdfWriter::finish`].
///
/// Object ids 1-3 are reserved for the shared resources, the page tree and
/// the catalog so pages can reference them before they are complete.
/// Objects are written in id order, so identical input produces identical
/// bytes.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    info: Option<Dictionary>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%\u{e2}\u{e3}\u{cf}\u{d3}\n", version).as_bytes())?;

        let resources_id = (1, 0);
        let pages_id = (2, 0);
        let catalog_id = (3, 0);

        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, dictionary! { "Font" => font_dict }.into());

        Ok(Self {
            writer,
            max_id: 3,
            catalog_id,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            info: None,
            buffered_objects,
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        let id = self.new_object_id();
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn buffer_content_stream(&mut self, content: Content) -> Result<ObjectId, lopdf::Error> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.buffer_object(Object::Stream(stream)))
    }

    pub fn set_page_ids(&mut self, page_ids: Vec<ObjectId>) {
        self.page_ids = page_ids;
    }

    pub fn set_info(&mut self, info: Dictionary) {
        self.info = Some(info);
    }

    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffered_objects.insert(self.pages_id, pages_dict.into());

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffered_objects.insert(self.catalog_id, catalog_dict.into());

        let info_id = self.info.take().map(|info| self.buffer_object(info.into()));

        let mut offsets: BTreeMap<u32, u64> = BTreeMap::new();
        for (id, object) in &self.buffered_objects {
            offsets.insert(id.0, self.writer.stream_position()?);
            serialize::ObjectEncoder::new(&mut self.writer).indirect(*id, object)?;
        }

        let xref_start = self.writer.stream_position()?;
        let size = self.max_id + 1;
        serialize::write_xref(&mut self.writer, size, &offsets)?;

        let mut trailer = dictionary! { "Size" => size as i64, "Root" => self.catalog_id };
        if let Some(info_id) = info_id {
            trailer.set("Info", info_id);
        }
        writeln!(self.writer, "trailer")?;
        serialize::ObjectEncoder::new(&mut self.writer).dictionary(&trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

mod serialize {
    use super::*;
    use lopdf::StringFormat;

    /// Encodes lopdf objects in PDF syntax. Dictionary keys are emitted in
    /// sorted order.
    pub struct ObjectEncoder<'w, W: Write> {
        out: &'w mut W,
    }

    impl<'w, W: Write> ObjectEncoder<'w, W> {
        pub fn new(out: &'w mut W) -> Self {
            Self { out }
        }

        pub fn indirect(&mut self, id: ObjectId, object: &Object) -> io::Result<()> {
            writeln!(self.out, "{} {} obj", id.0, id.1)?;
            self.object(object)?;
            writeln!(self.out, "\nendobj")
        }

        pub fn object(&mut self, object: &Object) -> io::Result<()> {
            match object {
                Object::Null => self.out.write_all(b"null"),
                Object::Boolean(true) => self.out.write_all(b"true"),
                Object::Boolean(false) => self.out.write_all(b"false"),
                Object::Integer(i) => write!(self.out, "{}", i),
                Object::Real(r) => write!(self.out, "{:.3}", r),
                Object::Name(name) => self.name(name),
                Object::String(bytes, StringFormat::Literal) => self.literal(bytes),
                Object::String(bytes, StringFormat::Hexadecimal) => self.hex(bytes),
                Object::Array(items) => self.array(items),
                Object::Dictionary(dict) => self.dictionary(dict),
                Object::Stream(stream) => self.stream(stream),
                Object::Reference(id) => write!(self.out, "{} {} R", id.0, id.1),
            }
        }

        pub fn dictionary(&mut self, dict: &Dictionary) -> io::Result<()> {
            let mut entries: Vec<(&Vec<u8>, &Object)> = dict.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            self.out.write_all(b"<<")?;
            for (key, value) in entries {
                self.name(key)?;
                self.out.write_all(b" ")?;
                self.object(value)?;
                self.out.write_all(b" ")?;
            }
            self.out.write_all(b">>")
        }

        fn name(&mut self, name: &[u8]) -> io::Result<()> {
            self.out.write_all(b"/")?;
            self.out.write_all(name)
        }

        fn literal(&mut self, bytes: &[u8]) -> io::Result<()> {
            let mut escaped = Vec::with_capacity(bytes.len() + 2);
            escaped.push(b'(');
            for &byte in bytes {
                if let b'(' | b')' | b'\\' = byte {
                    escaped.push(b'\\');
                }
                escaped.push(byte);
            }
            escaped.push(b')');
            self.out.write_all(&escaped)
        }

        fn hex(&mut self, bytes: &[u8]) -> io::Result<()> {
            self.out.write_all(b"<")?;
            bytes.iter().try_for_each(|byte| write!(self.out, "{:02X}", byte))?;
            self.out.write_all(b">")
        }

        fn array(&mut self, items: &[Object]) -> io::Result<()> {
            self.out.write_all(b"[")?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    self.out.write_all(b" ")?;
                }
                self.object(item)?;
            }
            self.out.write_all(b"]")
        }

        /// `/Length` always reflects the content actually written.
        fn stream(&mut self, stream: &Stream) -> io::Result<()> {
            let mut dict = stream.dict.clone();
            dict.set("Length", stream.content.len() as i64);
            self.dictionary(&dict)?;
            self.out.write_all(b"\nstream\n")?;
            self.out.write_all(&stream.content)?;
            self.out.write_all(b"\nendstream")
        }
    }

    /// Writes a single xref subsection covering ids `0..size`. Ids without an
    /// offset are listed as free entries.
    pub fn write_xref<W: Write>(
        writer: &mut W,
        size: u32,
        offsets: &BTreeMap<u32, u64>,
    ) -> io::Result<()> {
        writeln!(writer, "xref")?;
        writeln!(writer, "0 {}", size)?;
        writer.write_all(b"0000000000 65535 f \n")?;
        for id in 1..size {
            match offsets.get(&id) {
                Some(offset) => write!(writer, "{:010} 00000 n \n", offset)?,
                None => writer.write_all(b"0000000000 00000 f \n")?,
            }
        }
        Ok(())
    }
}
