use checkdeps::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter capturing everything presented
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub presented: Arc<Mutex<Vec<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> String {
        self.presented.lock().unwrap().concat()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.presented.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
