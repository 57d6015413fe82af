//! Output trait for rendering reports to different formats.

/// Separator line around the previewed file content.
pub const SEPARATOR: &str = "_______________________";

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render the preview separator line.
    fn separator(&mut self);

    /// Render text exactly as given, without a trailing newline.
    fn verbatim(&mut self, text: &str);

    /// Render a line of text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn separator(&mut self) {
        println!("{}", SEPARATOR);
    }

    fn verbatim(&mut self, text: &str) {
        print!("{}", text);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered output into a string.
#[cfg(test)]
#[derive(Default)]
pub struct StringOutput {
    pub buf: String,
}

#[cfg(test)]
impl Output for StringOutput {
    fn section(&mut self, name: &str) {
        self.buf.push_str(&format!("{}:\n", name));
    }

    fn separator(&mut self) {
        self.buf.push_str(SEPARATOR);
        self.buf.push('\n');
    }

    fn verbatim(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    fn preformatted(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn newline(&mut self) {
        self.buf.push('\n');
    }
}
