//! Minimal WordprocessingML writer.
//!
//! Emits the handful of constructs the quote document needs (headings,
//! paragraphs, a bordered table, one inline image) as escaped XML strings and
//! packages them into the `.docx` zip container. Entries are written with a
//! fixed timestamp so identical input produces byte-identical output.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::common::{detect_image, escape_xml, ImageKind};
use super::RenderError;

/// MIME type of the produced container.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Display box for the embedded logo, in EMU (4.5cm x 1.5cm).
const LOGO_CX: u64 = 1_620_000;
const LOGO_CY: u64 = 540_000;

const IMAGE_REL_ID: &str = "rId10";

struct LogoImage {
    kind: ImageKind,
    bytes: Vec<u8>,
}

/// Fluent builder for the document body.
#[derive(Default)]
pub struct DocxBuilder {
    body: String,
    logo: Option<LogoImage>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed a logo image at the current position.
    ///
    /// Unrecognized image data is skipped with a warning; a decorative asset
    /// must never abort the render.
    pub fn logo(mut self, bytes: &[u8]) -> Self {
        match detect_image(bytes) {
            Some(kind) => {
                self.body.push_str(&inline_image_xml(IMAGE_REL_ID, LOGO_CX, LOGO_CY));
                self.logo = Some(LogoImage {
                    kind,
                    bytes: bytes.to_vec(),
                });
            }
            None => {
                log::warn!("logo data is not a recognizable PNG or JPEG, skipping");
            }
        }
        self
    }

    pub fn heading1(self, text: &str) -> Self {
        self.styled_paragraph(Some("Heading1"), text)
    }

    pub fn heading2(self, text: &str) -> Self {
        self.styled_paragraph(Some("Heading2"), text)
    }

    pub fn paragraph(self, text: &str) -> Self {
        self.styled_paragraph(None, text)
    }

    pub fn blank_line(mut self) -> Self {
        self.body.push_str("<w:p/>");
        self
    }

    fn styled_paragraph(mut self, style: Option<&str>, text: &str) -> Self {
        let props = match style {
            Some(name) => format!("<w:pPr><w:pStyle w:val=\"{}\"/></w:pPr>", name),
            None => String::new(),
        };
        self.body.push_str(&format!(
            "<w:p>{}<w:r>{}</w:r></w:p>",
            props,
            text_runs(text)
        ));
        self
    }

    /// Append a bordered table with a header row and one row per item.
    pub fn table(mut self, headers: &[&str], rows: &[Vec<String>]) -> Self {
        let mut xml = String::from(
            "<w:tbl><w:tblPr>\
             <w:tblW w:w=\"0\" w:type=\"auto\"/>\
             <w:tblBorders>\
             <w:top w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
             <w:left w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
             <w:bottom w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
             <w:right w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
             <w:insideH w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
             <w:insideV w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
             </w:tblBorders></w:tblPr><w:tblGrid>",
        );
        for _ in headers {
            xml.push_str("<w:gridCol/>");
        }
        xml.push_str("</w:tblGrid>");

        xml.push_str("<w:tr>");
        for header in headers {
            xml.push_str(&table_cell(header, true));
        }
        xml.push_str("</w:tr>");

        for row in rows {
            xml.push_str("<w:tr>");
            for cell in row {
                xml.push_str(&table_cell(cell, false));
            }
            xml.push_str("</w:tr>");
        }
        xml.push_str("</w:tbl>");

        self.body.push_str(&xml);
        self
    }

    /// Package the accumulated body into the `.docx` container.
    pub fn build(self) -> Result<Vec<u8>, RenderError> {
        let options = || {
            SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .last_modified_time(DateTime::default())
        };

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        writer.start_file("[Content_Types].xml", options())?;
        writer.write_all(content_types_xml(self.logo.as_ref().map(|l| l.kind)).as_bytes())?;

        writer.start_file("_rels/.rels", options())?;
        writer.write_all(ROOT_RELS.as_bytes())?;

        writer.start_file("word/_rels/document.xml.rels", options())?;
        writer.write_all(document_rels_xml(self.logo.as_ref().map(|l| l.kind)).as_bytes())?;

        writer.start_file("word/styles.xml", options())?;
        writer.write_all(STYLES_XML.as_bytes())?;

        writer.start_file("word/document.xml", options())?;
        writer.write_all(document_xml(&self.body).as_bytes())?;

        if let Some(logo) = &self.logo {
            writer.start_file(
                format!("word/media/logo.{}", logo.kind.extension()),
                options(),
            )?;
            writer.write_all(&logo.bytes)?;
        }

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Render text as runs, turning embedded newlines into line breaks.
fn text_runs(text: &str) -> String {
    let mut out = String::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<w:br/>");
        }
        out.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>",
            escape_xml(line)
        ));
    }
    out
}

fn table_cell(text: &str, bold: bool) -> String {
    let run_props = if bold { "<w:rPr><w:b/></w:rPr>" } else { "" };
    format!(
        "<w:tc><w:tcPr><w:tcW w:w=\"0\" w:type=\"auto\"/></w:tcPr>\
         <w:p><w:r>{}{}</w:r></w:p></w:tc>",
        run_props,
        text_runs(text)
    )
}

fn inline_image_xml(rel_id: &str, cx: u64, cy: u64) -> String {
    format!(
        "<w:p><w:r><w:drawing>\
         <wp:inline distT=\"0\" distB=\"0\" distL=\"0\" distR=\"0\">\
         <wp:extent cx=\"{cx}\" cy=\"{cy}\"/>\
         <wp:docPr id=\"1\" name=\"Logo\"/>\
         <a:graphic><a:graphicData uri=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">\
         <pic:pic>\
         <pic:nvPicPr><pic:cNvPr id=\"1\" name=\"Logo\"/><pic:cNvPicPr/></pic:nvPicPr>\
         <pic:blipFill><a:blip r:embed=\"{rel_id}\"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>\
         <pic:spPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></pic:spPr>\
         </pic:pic>\
         </a:graphicData></a:graphic>\
         </wp:inline>\
         </w:drawing></w:r></w:p>"
    )
}

fn content_types_xml(logo: Option<ImageKind>) -> String {
    let mut defaults = String::from(
        "<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
         <Default Extension=\"xml\" ContentType=\"application/xml\"/>",
    );
    if let Some(kind) = logo {
        defaults.push_str(&format!(
            "<Default Extension=\"{}\" ContentType=\"{}\"/>",
            kind.extension(),
            kind.content_type()
        ));
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
         {defaults}\
         <Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>\
         <Override PartName=\"/word/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml\"/>\
         </Types>"
    )
}

const ROOT_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"word/document.xml\"/>\
</Relationships>";

fn document_rels_xml(logo: Option<ImageKind>) -> String {
    let mut rels = String::from(
        "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\"/>",
    );
    if let Some(kind) = logo {
        rels.push_str(&format!(
            "<Relationship Id=\"{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/image\" Target=\"media/logo.{}\"/>",
            IMAGE_REL_ID,
            kind.extension()
        ));
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">{rels}</Relationships>"
    )
}

const STYLES_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<w:styles xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\"><w:name w:val=\"Normal\"/></w:style>\
<w:style w:type=\"paragraph\" w:styleId=\"Heading1\"><w:name w:val=\"heading 1\"/><w:basedOn w:val=\"Normal\"/>\
<w:pPr><w:spacing w:before=\"240\" w:after=\"120\"/></w:pPr>\
<w:rPr><w:b/><w:sz w:val=\"32\"/></w:rPr></w:style>\
<w:style w:type=\"paragraph\" w:styleId=\"Heading2\"><w:name w:val=\"heading 2\"/><w:basedOn w:val=\"Normal\"/>\
<w:pPr><w:spacing w:before=\"200\" w:after=\"100\"/></w:pPr>\
<w:rPr><w:b/><w:sz w:val=\"26\"/></w:rPr></w:style>\
</w:styles>";

fn document_xml(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document \
         xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\" \
         xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
         xmlns:wp=\"http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing\" \
         xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
         xmlns:pic=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">\
         <w:body>{body}<w:sectPr/></w:body></w:document>"
    )
}
