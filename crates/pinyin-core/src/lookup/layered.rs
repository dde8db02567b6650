use std::sync::Arc;

use super::{LookupError, PhoneticLookup};

/// A lookup that consults several layers.
///
/// Later layers have higher priority: the first layer (searching from the
/// last) that returns a non-empty list wins outright, readings are not merged
/// across layers. A failing layer is skipped; its error is only reported when
/// no other layer knows the symbol.
pub struct LayeredLookup {
    layers: Vec<Arc<dyn PhoneticLookup>>,
}

impl LayeredLookup {
    pub fn new(layers: Vec<Arc<dyn PhoneticLookup>>) -> Self {
        Self { layers }
    }

    /// Add a layer above all existing ones.
    pub fn push(&mut self, layer: Arc<dyn PhoneticLookup>) {
        self.layers.push(layer);
    }
}

impl PhoneticLookup for LayeredLookup {
    fn readings_for(&self, symbol: char) -> Result<Vec<String>, LookupError> {
        let mut last_err = None;
        for layer in self.layers.iter().rev() {
            match layer.readings_for(symbol) {
                Ok(readings) if !readings.is_empty() => return Ok(readings),
                Ok(_) => {}
                Err(e) => last_err = Some(e),
            }
        }
        match last_err {
            Some(e) => Err(e),
            None => Ok(Vec::new()),
        }
    }
}
