use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::surface::{DrawingSurface, SurfaceSize};

use super::{EngineBackend, EngineInstance, RenderOptions};

/// Engine operations observed by a [`RecordingEngine`], in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCall {
    Create,
    Update,
    Reset,
    Render,
    Stop,
    Resize,
    Clear,
    Export,
    Destroy,
}

/// Shared call journal for every instance a [`RecordingBackend`] creates.
///
/// Tests assert lifecycle pairing against `created`/`destroyed` and exact
/// call sequences against `calls`.
#[derive(Debug, Default)]
pub struct EngineJournal {
    pub calls: Vec<EngineCall>,
    pub created: usize,
    pub destroyed: usize,
    pub last_render: Option<RenderOptions>,
}

impl EngineJournal {
    /// Instances currently alive; never more than one per widget.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.created - self.destroyed
    }
}

/// No-op backend used by tests and headless embedding.
///
/// It performs no drawing but keeps enough state (the last native config,
/// the surface size, the render options seen) for behavior assertions.
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    journal: Rc<RefCell<EngineJournal>>,
}

impl RecordingBackend {
    #[must_use]
    pub fn journal(&self) -> Rc<RefCell<EngineJournal>> {
        Rc::clone(&self.journal)
    }
}

impl EngineBackend for RecordingBackend {
    type Instance = RecordingEngine;

    fn create_instance(&self, surface: &DrawingSurface, config: Value) -> RecordingEngine {
        let mut journal = self.journal.borrow_mut();
        journal.calls.push(EngineCall::Create);
        journal.created += 1;
        drop(journal);
        RecordingEngine {
            journal: Rc::clone(&self.journal),
            config,
            size: surface.size(),
        }
    }
}

/// Instance double produced by [`RecordingBackend`].
#[derive(Debug)]
pub struct RecordingEngine {
    journal: Rc<RefCell<EngineJournal>>,
    config: Value,
    size: SurfaceSize,
}

impl RecordingEngine {
    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }
}

impl EngineInstance for RecordingEngine {
    fn update(&mut self, config: Value) {
        self.journal.borrow_mut().calls.push(EngineCall::Update);
        self.config = config;
    }

    fn native_config(&self) -> Value {
        self.config.clone()
    }

    fn reset(&mut self) {
        self.journal.borrow_mut().calls.push(EngineCall::Reset);
    }

    fn render(&mut self, options: RenderOptions) {
        let mut journal = self.journal.borrow_mut();
        journal.calls.push(EngineCall::Render);
        journal.last_render = Some(options);
    }

    fn stop(&mut self) {
        self.journal.borrow_mut().calls.push(EngineCall::Stop);
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.journal.borrow_mut().calls.push(EngineCall::Resize);
        self.size = size;
    }

    fn clear(&mut self) {
        self.journal.borrow_mut().calls.push(EngineCall::Clear);
    }

    fn to_base64_image(&self) -> String {
        self.journal.borrow_mut().calls.push(EngineCall::Export);
        format!(
            "data:image/png;base64,{}x{}",
            self.size.width, self.size.height
        )
    }

    fn destroy(&mut self) {
        let mut journal = self.journal.borrow_mut();
        journal.calls.push(EngineCall::Destroy);
        journal.destroyed += 1;
    }
}
