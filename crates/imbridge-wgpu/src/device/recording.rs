use super::commands::PassCommand;
use super::transforms::TransformRing;

/// Calls recorded for the next [`super::WgpuDevice::encode`], with the
/// transforms their draws reference.
pub(super) struct PassRecording {
    commands: Vec<PassCommand>,
    pub(super) transforms: TransformRing,
}

impl PassRecording {
    pub fn new(min_offset_alignment: u32) -> Self {
        Self {
            commands: Vec::new(),
            transforms: TransformRing::new(min_offset_alignment),
        }
    }

    pub fn push(&mut self, command: PassCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn has_draws(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, PassCommand::Draw { .. }))
    }

    /// Moves the commands out. Staged transforms stay until [`Self::discard`].
    pub fn take_commands(&mut self) -> Vec<PassCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Drops everything recorded so far.
    pub fn discard(&mut self) {
        self.commands.clear();
        self.transforms.clear();
    }
}

#[cfg(test)]
mod tests {
    use imbridge_core::device::{ScissorRect, Viewport};

    use super::*;

    #[test]
    fn discard_leaves_nothing_for_the_next_frame() {
        let mut rec = PassRecording::new(256);
        rec.push(PassCommand::Viewport(Viewport::full(800, 600)));
        rec.push(PassCommand::Scissor(ScissorRect::new(0, 0, 10, 10)));
        rec.transforms.push([1.0; 16]);
        rec.transforms.push([2.0; 16]);

        rec.discard();

        assert_eq!(rec.len(), 0);
        assert!(!rec.has_draws());
        assert_eq!(rec.transforms.push([3.0; 16]), 0);
    }

    #[test]
    fn take_commands_empties_the_list() {
        let mut rec = PassRecording::new(256);
        rec.push(PassCommand::Viewport(Viewport::full(800, 600)));

        assert_eq!(rec.take_commands().len(), 1);
        assert_eq!(rec.len(), 0);
    }
}
