//! Sponsors renderer
//!
//! Renders sponsors as linked avatar images for inclusion in the website.

use std::io::{self, Write};

use html_escape::encode_double_quoted_attribute as attr;

use crate::domain::entities::Sponsor;

/// The avatar block template, one block per sponsor.
///
/// Built once at startup and handed to whatever writes the output.
#[derive(Debug, Clone, Copy)]
pub struct SponsorTemplate {
    avatar_class: &'static str,
}

impl Default for SponsorTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl SponsorTemplate {
    pub const fn new() -> Self {
        Self {
            avatar_class: "img github-avatar",
        }
    }

    /// Render every sponsor, in the given order, to a string
    pub fn render(&self, sponsors: &[Sponsor]) -> String {
        sponsors
            .iter()
            .map(|sponsor| self.render_sponsor(sponsor))
            .collect()
    }

    /// Render every sponsor, in the given order, to `out`
    pub fn render_to<W: Write>(&self, sponsors: &[Sponsor], out: &mut W) -> io::Result<()> {
        out.write_all(self.render(sponsors).as_bytes())?;
        out.flush()
    }

    fn render_sponsor(&self, sponsor: &Sponsor) -> String {
        format!(
            "\n<a href=\"{}\">\n\t<img src=\"{}\" class=\"{}\" alt=\"{}\">\n</a>\n",
            attr(&sponsor.link_url),
            attr(&sponsor.avatar_url),
            self.avatar_class,
            attr(&sponsor.name)
        )
    }
}
