//! Template argument cleaning
//!
//! Template arguments arrive as an ordered map from parameter name (or
//! position) to raw wiki text. Both sides are cleaned with HTML kept.

use indexmap::IndexMap;

use crate::core::clean::{default_cleaner, CleanOptions, Cleaner};

impl Cleaner {
    /// Clean every key and value of a template argument map, keeping order.
    ///
    /// Keys that become equal after cleaning are merged; the last value wins
    /// and the first key's position is kept.
    pub fn clean_template_args(
        &self,
        args: &IndexMap<String, String>,
        no_strip: bool,
    ) -> IndexMap<String, String> {
        let value_options = CleanOptions {
            no_strip,
            ..CleanOptions::raw_html()
        };
        args.iter()
            .map(|(key, value)| {
                (
                    self.clean(key, CleanOptions::raw_html()),
                    self.clean(value, value_options),
                )
            })
            .collect()
    }
}

/// Clean template arguments with English namespace names
pub fn clean_template_args(
    args: &IndexMap<String, String>,
    no_strip: bool,
) -> IndexMap<String, String> {
    default_cleaner().clean_template_args(args, no_strip)
}
