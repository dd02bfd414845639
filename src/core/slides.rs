use crate::core::view::ViewCommand;

/// Ordered slide ids (document order) and the active one.
#[derive(Clone, Debug, Default)]
pub struct SlideDeck {
    ids: Vec<String>,
    active: Option<usize>,
}

impl SlideDeck {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids, active: None }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.ids[i].as_str())
    }

    /// Activate `id`. Unknown ids leave the deck untouched.
    pub fn show(&mut self, id: &str, out: &mut Vec<ViewCommand>) -> bool {
        match self.ids.iter().position(|s| s == id) {
            Some(i) => {
                self.active = Some(i);
                out.push(ViewCommand::ShowSlide { id: id.to_string() });
                true
            }
            None => false,
        }
    }

    /// Move to the following slide; no wrap-around.
    pub fn next(&mut self, out: &mut Vec<ViewCommand>) -> bool {
        match self.active {
            Some(i) if i + 1 < self.ids.len() => {
                let id = self.ids[i + 1].clone();
                self.show(&id, out)
            }
            _ => false,
        }
    }

    /// Move to the preceding slide; no wrap-around.
    pub fn prev(&mut self, out: &mut Vec<ViewCommand>) -> bool {
        match self.active {
            Some(i) if i > 0 => {
                let id = self.ids[i - 1].clone();
                self.show(&id, out)
            }
            _ => false,
        }
    }
}
