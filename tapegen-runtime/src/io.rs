//! I/O handling

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct IOHandler {
    inputs: VecDeque<u8>,
    outputs: Vec<u8>,
}

impl IOHandler {
    pub fn new(inputs: Vec<u8>) -> Self {
        IOHandler {
            inputs: inputs.into(),
            outputs: Vec::new(),
        }
    }

    pub fn read(&mut self) -> Option<u8> {
        self.inputs.pop_front()
    }

    pub fn write(&mut self, value: u8) {
        self.outputs.push(value);
    }

    pub fn outputs(&self) -> &[u8] {
        &self.outputs
    }

    pub fn take_outputs(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.outputs)
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_in_order() {
        let mut io = IOHandler::new(vec![5, 7]);
        assert_eq!(io.read(), Some(5));
        assert_eq!(io.read(), Some(7));
        assert_eq!(io.read(), None);
    }

    #[test]
    fn test_write_and_take() {
        let mut io = IOHandler::new(vec![]);
        io.write(12);
        assert_eq!(io.outputs(), &[12]);
        assert_eq!(io.take_outputs(), vec![12]);
        assert!(io.outputs().is_empty());
    }
}
