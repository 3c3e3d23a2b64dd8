//! Default TOML config template with inline documentation.

/// Generate the default TOML config content with comments.
pub fn default_config_toml() -> String {
    r##"# Pairnav Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[pairing]
# Workspace-relative directories whose files are paired by filename stem.
# Leave either empty to disable pairing.
source_dir = "src/graphql/resolvers"
counterpart_dir = "src/graphql/typeDefs"
# open_in_split_view = true    # adjacent editor group instead of the active one
# use_preview_mode = false     # transient preview tab instead of a pinned tab
# open_on_view = false         # open the counterpart whenever a paired file is opened
# prefix_match = "segment"     # segment, textual

[search]
# exclude = ["**/node_modules/**"]
# max_candidates = 32          # 1-1000
# suppression_timeout_ms = 1000  # 50-60000

[logging]
# level = "INFO"               # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
