use crate::command::Command;

/// Ordered zpl commands of a document
///
/// Commands go into three regions: the pre commands, written once before the first label, the labels themselves, and the post commands, written once after the last label. Between two labels, the post commands followed by the pre commands are repeated, so each physical label gets the same setup.
///
/// ```rust
/// # use zpl_rs::CommandBuffer;
/// let mut buffer = CommandBuffer::new();
/// buffer.prepend_global("^PW400");
/// buffer.append("^FO10,10^GB100,100,3^FS");
/// buffer.break_page();
/// buffer.append("^FO10,10^GC100,3,B^FS");
///
/// let target = "^PW400\n^XA\n^FO10,10^GB100,100,3^FS\n^XZ\n^PW400\n^XA\n^FO10,10^GC100,3,B^FS\n^XZ\n";
/// assert_eq!(target, buffer.serialize());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CommandBuffer {
    pre_commands: Vec<String>,
    /// Body of each label, never empty
    labels: Vec<Vec<String>>,
    post_commands: Vec<String>
}

impl Default for CommandBuffer {
    fn default() -> CommandBuffer {
        CommandBuffer::new()
    }
}

impl CommandBuffer {
    pub fn new() -> CommandBuffer {
        CommandBuffer {
            pre_commands: Vec::new(),
            labels: vec![Vec::new()],
            post_commands: Vec::new()
        }
    }

    /// Adds a command to the current label
    pub fn append<A: Into<String>>(&mut self, command: A) {
        let command = command.into();
        log::trace!("{}", command);
        if let Some(label) = self.labels.last_mut() {
            label.push(command);
        }
    }

    /// Adds a command to be written before the first label, and between labels
    pub fn prepend_global<A: Into<String>>(&mut self, command: A) {
        self.pre_commands.push(command.into());
    }

    /// Adds a command to be written after the last label, and between labels
    pub fn append_global<A: Into<String>>(&mut self, command: A) {
        self.post_commands.push(command.into());
    }

    pub fn set_pre_commands<A: IntoIterator<Item = B>, B: Into<String>>(&mut self, commands: A) {
        self.pre_commands = commands.into_iter().map(|command| command.into()).collect();
    }

    pub fn set_post_commands<A: IntoIterator<Item = B>, B: Into<String>>(&mut self, commands: A) {
        self.post_commands = commands.into_iter().map(|command| command.into()).collect();
    }

    pub fn pre_commands(&self) -> &[String] {
        &self.pre_commands
    }

    pub fn post_commands(&self) -> &[String] {
        &self.post_commands
    }

    /// Closes the current label and starts a new one
    pub fn break_page(&mut self) {
        self.labels.push(Vec::new());
        log::debug!("Starting label {}", self.labels.len());
    }

    /// Number of labels, at least 1
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// True when no command at all was added
    pub fn is_empty(&self) -> bool {
        self.pre_commands.is_empty()
            && self.post_commands.is_empty()
            && self.labels.iter().all(|label| label.is_empty())
    }

    /// Drops every command, leaving a single empty label
    pub fn clear(&mut self) {
        self.pre_commands.clear();
        self.post_commands.clear();
        self.labels = vec![Vec::new()];
    }

    /// Joins every region into the final document
    ///
    /// The buffer is left untouched, so this can be called as many times as needed.
    pub fn serialize(&self) -> String {
        let start = Command::StartFormat.to_string();
        let end = Command::EndFormat.to_string();

        let mut lines: Vec<&str> = Vec::new();
        lines.extend(self.pre_commands.iter().map(|c| c.as_str()));
        lines.push(&start);
        for (idx, label) in self.labels.iter().enumerate() {
            if idx > 0 {
                lines.push(&end);
                lines.extend(self.post_commands.iter().map(|c| c.as_str()));
                lines.extend(self.pre_commands.iter().map(|c| c.as_str()));
                lines.push(&start);
            }
            lines.extend(label.iter().map(|c| c.as_str()));
        }
        lines.push(&end);
        lines.extend(self.post_commands.iter().map(|c| c.as_str()));
        lines.push("");
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document() {
        assert_eq!("^XA\n^XZ\n", CommandBuffer::new().serialize());
    }

    #[test]
    fn page_break_repeats_globals_once() {
        let mut buffer = CommandBuffer::new();
        buffer.prepend_global("^A");
        buffer.append_global("^B");
        buffer.break_page();
        let zpl = buffer.serialize();
        assert_eq!("^A\n^XA\n^XZ\n^B\n^A\n^XA\n^XZ\n^B\n", zpl);
        assert_eq!(1, zpl.matches("^B\n^A").count());
    }

    #[test]
    fn page_break_without_globals() {
        let mut buffer = CommandBuffer::new();
        buffer.append("^FDone^FS");
        buffer.break_page();
        buffer.append("^FDtwo^FS");
        assert_eq!("^XA\n^FDone^FS\n^XZ\n^XA\n^FDtwo^FS\n^XZ\n", buffer.serialize());
        assert_eq!(2, buffer.label_count());
    }

    #[test]
    fn serialize_is_repeatable() {
        let mut buffer = CommandBuffer::new();
        buffer.prepend_global("^CI28");
        buffer.append("^FO0,0^GB2^FS");
        let first = buffer.serialize();
        assert_eq!(first, buffer.serialize());
        buffer.append("^FO1,1^GB2^FS");
        assert_ne!(first, buffer.serialize());
    }

    #[test]
    fn sentinel_like_data_is_left_alone() {
        let mut buffer = CommandBuffer::new();
        buffer.append_global("^XB");
        buffer.append("^FD%PAGE_SEPARATOR%^FS");
        assert_eq!("^XA\n^FD%PAGE_SEPARATOR%^FS\n^XZ\n^XB\n", buffer.serialize());
    }

    #[test]
    fn set_and_clear() {
        let mut buffer = CommandBuffer::new();
        buffer.set_pre_commands(vec!["^A", "^B"]);
        buffer.set_post_commands(vec!["^C"]);
        assert_eq!(&["^A".to_string(), "^B".to_string()], buffer.pre_commands());
        assert!(!buffer.is_empty());
        buffer.break_page();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(1, buffer.label_count());
        assert_eq!(CommandBuffer::new(), buffer);
    }
}
