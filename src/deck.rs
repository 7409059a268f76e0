use std::path::PathBuf;

/// Menu label used when a deck declares no title of its own.
pub const FALLBACK_TITLE: &str = "Presentation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Forward,
    Backward,
}

/// Visual treatment applied to a step block once it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepStyle {
    #[default]
    Reveal,
    Highlight,
    Dim,
    Big,
}

impl StepStyle {
    /// Unknown names fall back to the plain reveal style.
    pub fn from_name(name: &str) -> Self {
        match name {
            "highlight" => StepStyle::Highlight,
            "dim" => StepStyle::Dim,
            "big" => StepStyle::Big,
            _ => StepStyle::Reveal,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepMarker {
    pub style: StepStyle,
    pub active: bool,
}

/// One content block of a slide. Blocks without a marker are always shown;
/// marked blocks are revealed progressively in document order.
#[derive(Debug, Clone)]
pub struct Block {
    pub text: String,
    pub step: Option<StepMarker>,
}

impl Block {
    pub fn fixed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            step: None,
        }
    }

    pub fn step(text: impl Into<String>, style: StepStyle) -> Self {
        Self {
            text: text.into(),
            step: Some(StepMarker {
                style,
                active: false,
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Slide {
    pub heading: Option<String>,
    pub blocks: Vec<Block>,
    pub visible: bool,
}

impl Slide {
    pub fn new(heading: Option<String>, blocks: Vec<Block>) -> Self {
        Self {
            heading,
            blocks,
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hiding never touches step markers; they keep their state until a
    /// forced reset (jump-to-first or session teardown).
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn step(&mut self, direction: StepDirection) -> bool {
        match direction {
            StepDirection::Forward => self.reveal_next_step(),
            StepDirection::Backward => self.revert_last_step(),
        }
    }

    /// Activates the first inactive marker in document order. Returns false
    /// when every marker is already active, i.e. the slide is exhausted.
    pub fn reveal_next_step(&mut self) -> bool {
        for block in &mut self.blocks {
            if let Some(marker) = &mut block.step {
                if !marker.active {
                    marker.active = true;
                    return true;
                }
            }
        }
        false
    }

    /// Deactivates the last active marker in document order. Returns false
    /// when no marker is active.
    pub fn revert_last_step(&mut self) -> bool {
        for block in self.blocks.iter_mut().rev() {
            if let Some(marker) = &mut block.step {
                if marker.active {
                    marker.active = false;
                    return true;
                }
            }
        }
        false
    }

    pub fn reset_steps(&mut self) {
        for block in &mut self.blocks {
            if let Some(marker) = &mut block.step {
                marker.active = false;
            }
        }
    }

    pub fn step_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.step.is_some()).count()
    }

    pub fn active_step_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.step.as_ref().is_some_and(|m| m.active))
            .count()
    }
}

/// One presentation: an ordered sequence of slides loaded from a deck file.
#[derive(Debug, Clone)]
pub struct Deck {
    pub path: PathBuf,
    pub title: Option<String>,
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn new(path: PathBuf, title: Option<String>, slides: Vec<Slide>) -> Self {
        Self {
            path,
            title,
            slides,
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(FALLBACK_TITLE)
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Global step reset across every slide of the deck.
    pub fn reset_steps(&mut self) {
        for slide in &mut self.slides {
            slide.reset_steps();
        }
    }

    pub fn hide_all(&mut self) {
        for slide in &mut self.slides {
            slide.hide();
        }
    }

    pub fn active_step_total(&self) -> usize {
        self.slides.iter().map(Slide::active_step_count).sum()
    }
}
