// Composite: files and directories answer the same `display` call.

use std::rc::Rc;

use crate::console::Transcript;

pub trait FileSystemComponent {
    fn name(&self) -> &str;

    /// Writes this component, indented two spaces per `depth`.
    fn display_at(&self, depth: usize, out: &mut Transcript);

    /// File entries under this component. A file shared by two
    /// directories is an entry in each, so it counts twice.
    fn file_entries(&self) -> usize;

    fn display(&self, out: &mut Transcript) {
        self.display_at(0, out);
    }
}

#[derive(Debug)]
pub struct File {
    name: String,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FileSystemComponent for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_at(&self, depth: usize, out: &mut Transcript) {
        out.say(format!("{}File: {}", indent(depth), self.name));
    }

    fn file_entries(&self) -> usize {
        1
    }
}

/// A directory; children are shared so one file may live in several
/// directories at once.
pub struct Directory {
    name: String,
    children: Vec<Rc<dyn FileSystemComponent>>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, component: Rc<dyn FileSystemComponent>) {
        self.children.push(component);
    }

    /// Removes the first occurrence of exactly this component.
    pub fn remove(&mut self, component: &Rc<dyn FileSystemComponent>) -> bool {
        match self.children.iter().position(|c| Rc::ptr_eq(c, component)) {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn children(&self) -> &[Rc<dyn FileSystemComponent>] {
        &self.children
    }
}

impl FileSystemComponent for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_at(&self, depth: usize, out: &mut Transcript) {
        out.say(format!("{}Directory: {}", indent(depth), self.name));
        for child in &self.children {
            child.display_at(depth + 1, out);
        }
    }

    fn file_entries(&self) -> usize {
        self.children.iter().map(|c| c.file_entries()).sum()
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

pub fn demo(out: &mut Transcript) {
    let file1: Rc<dyn FileSystemComponent> = Rc::new(File::new("file1.txt"));
    let file2: Rc<dyn FileSystemComponent> = Rc::new(File::new("file2.txt"));

    let mut sub_directory = Directory::new("Subdirectory");
    sub_directory.add(Rc::clone(&file1));
    sub_directory.add(Rc::clone(&file2));

    let mut root = Directory::new("Root");
    root.add(file1);
    root.add(file2);
    root.add(Rc::new(sub_directory));

    root.display(out);
    out.say(format!("Total file entries: {}", root.file_entries()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_display() {
        let mut out = Transcript::buffered();
        File::new("a.txt").display(&mut out);
        assert_eq!(out.lines(), ["File: a.txt"]);
    }

    #[test]
    fn test_nested_display_order() {
        let mut inner = Directory::new("inner");
        inner.add(Rc::new(File::new("b")));

        let mut outer = Directory::new("outer");
        outer.add(Rc::new(File::new("a")));
        outer.add(Rc::new(inner));
        outer.add(Rc::new(File::new("c")));

        let mut out = Transcript::buffered();
        outer.display(&mut out);
        assert_eq!(
            out.lines(),
            [
                "Directory: outer",
                "  File: a",
                "  Directory: inner",
                "    File: b",
                "  File: c",
            ]
        );
        assert_eq!(outer.file_entries(), 3);
    }

    #[test]
    fn test_remove_specific_child() {
        let shared: Rc<dyn FileSystemComponent> = Rc::new(File::new("same-name"));
        let other: Rc<dyn FileSystemComponent> = Rc::new(File::new("same-name"));

        let mut dir = Directory::new("d");
        dir.add(Rc::clone(&shared));
        dir.add(Rc::clone(&other));

        assert!(dir.remove(&other));
        assert_eq!(dir.children().len(), 1);
        assert!(Rc::ptr_eq(&dir.children()[0], &shared));
        assert!(!dir.remove(&other));
    }

    #[test]
    fn test_shared_file_counts_once_per_parent() {
        let shared: Rc<dyn FileSystemComponent> = Rc::new(File::new("shared.txt"));

        let mut left = Directory::new("left");
        left.add(Rc::clone(&shared));
        let mut right = Directory::new("right");
        right.add(Rc::clone(&shared));

        let mut root = Directory::new("root");
        root.add(Rc::new(left));
        root.add(Rc::new(right));

        assert_eq!(root.file_entries(), 2);
        assert_eq!(Rc::strong_count(&shared), 3);
    }

    #[test]
    fn test_empty_directory() {
        let dir = Directory::new("empty");
        let mut out = Transcript::buffered();
        dir.display(&mut out);
        assert_eq!(out.lines(), ["Directory: empty"]);
        assert_eq!(dir.file_entries(), 0);
        assert_eq!(dir.name(), "empty");
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::buffered();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "Directory: Root",
                "  File: file1.txt",
                "  File: file2.txt",
                "  Directory: Subdirectory",
                "    File: file1.txt",
                "    File: file2.txt",
                "Total file entries: 4",
            ]
        );
    }
}
