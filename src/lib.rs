//! # Desktop Site Prep
//!
//! Prepares a desktop-app template project for packaging a pre-built
//! static site. One run rewrites the template's metadata, drops the site
//! into the packaging input directory, installs icons, and bakes the
//! auto-update choice into a generated module. A packaging tool consumes
//! the result afterwards; nothing here builds or signs anything.
//!
//! # Pipeline
//!
//! ```text
//! 1. Inputs     environment       →  Inputs           (trim, defaults, v-strip)
//! 2. Metadata   Inputs            →  package.json     (partial overwrite)
//! 3. Icons      ICON_*_PATH       →  assets/AppIcon.* (optional, per format)
//! 4. Site       SITE_PATH         →  dist/            (wipe + filtered copy)
//! 5. Update     AUTO_UPDATE       →  src/auto-update.js (+ update-config.json)
//! ```
//!
//! Stage 1 runs in `main`; the rest run in [`prepare::prepare`], which takes
//! the resolved [`inputs::Inputs`] explicitly. No stage reads the process
//! environment itself.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`inputs`] | Environment keys, defaults, and the `Inputs` bundle |
//! | [`naming`] | Version normalization and package-name slugs |
//! | [`types`] | Fixed file layout of the template project |
//! | [`metadata`] | `package.json` merge |
//! | [`icons`] | Icon provisioning |
//! | [`site`] | Site directory guard and filtered copy |
//! | [`auto_update`] | Stub vs. enabled module, update config file |
//! | [`prepare`] | Stage orchestration and the top-level error |
//! | [`output`] | Progress lines printed to stdout |
//!
//! # Design Decisions
//!
//! ## Generated Module Instead of a Runtime Flag
//!
//! The packaged app loads `src/auto-update.js` in its own process, with no
//! access to the environment this tool ran in. Writing one of two fixed
//! module texts makes the choice part of the shipped artifact.
//!
//! ## Reruns Are Safe
//!
//! The site copy wipes its destination first, the slug and version
//! transforms are idempotent, and disabling auto-update removes a config
//! left by an earlier enabled run. Running twice with the same inputs gives
//! the same tree as running once.

pub mod auto_update;
pub mod icons;
pub mod inputs;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod prepare;
pub mod site;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
