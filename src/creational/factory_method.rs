// Factory Method: each creator decides which document type it produces.

use crate::console::Transcript;

pub trait Document {
    fn kind(&self) -> &'static str;
    fn open(&self, out: &mut Transcript);
    fn save(&self, out: &mut Transcript);
}

pub struct PdfDocument;

impl Document for PdfDocument {
    fn kind(&self) -> &'static str {
        "PDF"
    }

    fn open(&self, out: &mut Transcript) {
        out.say("Opening PDF document");
    }

    fn save(&self, out: &mut Transcript) {
        out.say("Saving PDF document");
    }
}

pub struct WordDocument;

impl Document for WordDocument {
    fn kind(&self) -> &'static str {
        "Word"
    }

    fn open(&self, out: &mut Transcript) {
        out.say("Opening Word document");
    }

    fn save(&self, out: &mut Transcript) {
        out.say("Saving Word document");
    }
}

pub trait DocumentCreator {
    /// The factory method.
    fn create_document(&self) -> Box<dyn Document>;

    /// Works against whatever `create_document` returns.
    fn edit(&self, out: &mut Transcript) -> Box<dyn Document> {
        let document = self.create_document();
        document.open(out);
        document.save(out);
        document
    }
}

pub struct PdfDocumentCreator;

impl DocumentCreator for PdfDocumentCreator {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(PdfDocument)
    }
}

pub struct WordDocumentCreator;

impl DocumentCreator for WordDocumentCreator {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(WordDocument)
    }
}

pub fn demo(out: &mut Transcript) {
    let creators: [&dyn DocumentCreator; 2] = [&PdfDocumentCreator, &WordDocumentCreator];
    for creator in creators {
        creator.edit(out);
    }
}
