use std::io::{self, Stdout, Write};

use derive_new::new;

use crate::session::{Phase, View};

/// Draws the session view
pub trait Renderer {
    /// Render the current view
    fn render(&mut self, view: &View) -> io::Result<()>;
}

/// Plain-text renderer for terminals and other writers
#[derive(new)]
pub struct Terminal<W: Write> {
    out: W,
}

impl Terminal<Stdout> {
    /// A renderer writing to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    /// Consume the renderer, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for Terminal<W> {
    fn render(&mut self, view: &View) -> io::Result<()> {
        match view.phase {
            Phase::Idle => {
                if let Some(review) = &view.current_review {
                    writeln!(self.out, "\nReview: \"{}\"", review.text)?;
                }
            }
            Phase::Loading => writeln!(self.out, "Analyzing...")?,
            Phase::ResultShown => {
                if let Some(result) = &view.sentiment {
                    writeln!(
                        self.out,
                        "Sentiment: {} {}",
                        result.sentiment.icon(),
                        result
                    )?;
                }

                if let Some(density) = &view.noun_density {
                    writeln!(self.out, "Noun density: {} {}", density.icon(), density)?;
                }
            }
            Phase::ErrorShown => {
                if let Some(error) = &view.error {
                    writeln!(self.out, "Error: {}", error)?;
                }
            }
        }

        self.out.flush()
    }
}
