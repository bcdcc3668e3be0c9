// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tag taxonomy query surface.

/// Fields contributed to the root `Query` type.
pub const QUERIES: &str = r#"
    # Containing mainTags and tagTree.
    tags: Tags!
"#;

/// Type definitions of the tag fragment.
pub const TYPES: &str = r#"
type Tags {
    # Main tags are predefined manually.
    mainTags: [String!]!
    # Recommended tags are picked manually.
    recommended: [String!]!
    tree(query: String): [TagTreeNode!]
}

type TagTreeNode {
    mainTag: String!
    subTags: [String!]
}
"#;
