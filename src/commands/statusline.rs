//! The renderer entrypoint: decode the session context, gather the three
//! optional segments, compose, and print exactly one line.

use std::io::{Read, Write};

use anyhow::Result;

use crate::context::SessionContext;
use crate::git::{self, GitClient};
use crate::render::{self, Segment};
use crate::snippet;
use crate::state::StateStore;

/// Render the statusline for the session context on `input`.
///
/// All recoverable failure handling lives in the components: every segment
/// degrades independently to empty, so the worst case is an empty line.
pub fn statusline(
    input: &mut impl Read,
    out: &mut impl Write,
    store: &StateStore,
    git: &impl GitClient,
) -> Result<()> {
    let ctx = SessionContext::from_reader(input);

    let prompt = snippet::prompt_snippet(store);
    let prompt = if prompt.is_empty() {
        prompt
    } else {
        format!("✎ {prompt}")
    };

    let git_status = git::status_summary(git, store, ctx.workspace_dir());
    let model = render::shorten_model_name(ctx.model_display_name());

    let line = render::compose(&[
        Segment::new(prompt, render::prompt_style()),
        Segment::new(git_status, render::git_style()),
        Segment::new(model, render::model_style()),
    ]);
    writeln!(out, "{line}")?;
    Ok(())
}
