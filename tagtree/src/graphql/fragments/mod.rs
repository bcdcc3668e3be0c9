// SPDX-License-Identifier: AGPL-3.0-or-later

//! Static GraphQL SDL fragments.
//!
//! Each fragment contributes type definitions and optionally fields of the root `Query` type.
//! [`assemble`] stitches them together into one schema document which can be handed to any
//! GraphQL tooling. The executable schema built in `graphql::schema` exposes the same field
//! signatures.
pub mod base;
pub mod tag;

/// Query fields of all fragments, in the order they appear in the root `Query` type.
const QUERIES: [&str; 1] = [tag::QUERIES];

/// Type definitions of all fragments.
const TYPES: [&str; 2] = [base::TYPES, tag::TYPES];

/// Concatenates all fragments into a complete SDL document.
pub fn assemble() -> String {
    let mut sdl = String::from("schema {\n    query: Query\n}\n\ntype Query {");

    for queries in QUERIES {
        sdl.push_str(queries);
    }

    sdl.push_str("}\n");

    for types in TYPES {
        sdl.push_str(types);
    }

    sdl
}

#[cfg(test)]
pub(crate) mod tests {
    use async_graphql::parser::parse_schema;
    use async_graphql::parser::types::{
        ServiceDocument, TypeDefinition, TypeKind, TypeSystemDefinition,
    };
    use rstest::rstest;

    use super::{assemble, base, tag};

    /// Returns the type definition with the given name from a parsed schema document.
    pub(crate) fn find_type<'a>(document: &'a ServiceDocument, name: &str) -> &'a TypeDefinition {
        document
            .definitions
            .iter()
            .find_map(|definition| match definition {
                TypeSystemDefinition::Type(type_definition)
                    if type_definition.node.name.node.as_str() == name =>
                {
                    Some(&type_definition.node)
                }
                _ => None,
            })
            .unwrap_or_else(|| panic!("Type {} is missing", name))
    }

    /// Returns `(field, type, [(argument, type)])` triples of an object or input object.
    pub(crate) fn signatures(
        type_definition: &TypeDefinition,
    ) -> Vec<(String, String, Vec<(String, String)>)> {
        match &type_definition.kind {
            TypeKind::Object(object) => object
                .fields
                .iter()
                .map(|field| {
                    let arguments = field
                        .node
                        .arguments
                        .iter()
                        .map(|argument| {
                            (
                                argument.node.name.node.to_string(),
                                argument.node.ty.node.to_string(),
                            )
                        })
                        .collect();

                    (
                        field.node.name.node.to_string(),
                        field.node.ty.node.to_string(),
                        arguments,
                    )
                })
                .collect(),
            TypeKind::InputObject(input) => input
                .fields
                .iter()
                .map(|field| {
                    (
                        field.node.name.node.to_string(),
                        field.node.ty.node.to_string(),
                        Vec::new(),
                    )
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn field_type(document: &ServiceDocument, type_name: &str, field_name: &str) -> String {
        signatures(find_type(document, type_name))
            .into_iter()
            .find(|(name, _, _)| name == field_name)
            .map(|(_, ty, _)| ty)
            .unwrap_or_else(|| panic!("Field {}.{} is missing", type_name, field_name))
    }

    #[test]
    fn assembled_schema_parses() {
        assert!(parse_schema(assemble()).is_ok());
    }

    #[test]
    fn fragments_parse_on_their_own() {
        assert!(parse_schema(base::TYPES).is_ok());
        assert!(parse_schema(tag::TYPES).is_ok());
    }

    #[test]
    fn exposes_exactly_one_query_field() {
        let document = parse_schema(assemble()).unwrap();
        let query = signatures(find_type(&document, "Query"));

        assert_eq!(
            query,
            vec![("tags".to_string(), "Tags!".to_string(), Vec::new())]
        );
    }

    #[test]
    fn time_is_a_scalar() {
        let document = parse_schema(assemble()).unwrap();
        assert!(matches!(
            find_type(&document, "Time").kind,
            TypeKind::Scalar
        ));
    }

    #[test]
    fn slice_query_is_an_input_object() {
        let document = parse_schema(assemble()).unwrap();
        assert!(matches!(
            find_type(&document, "SliceQuery").kind,
            TypeKind::InputObject(_)
        ));
    }

    #[rstest]
    #[case("SliceInfo", "firstCursor", "String!")]
    #[case("SliceInfo", "lastCursor", "String!")]
    #[case("SliceQuery", "before", "String")]
    #[case("SliceQuery", "after", "String")]
    #[case("SliceQuery", "limit", "Int!")]
    #[case("Tags", "mainTags", "[String!]!")]
    #[case("Tags", "recommended", "[String!]!")]
    #[case("Tags", "tree", "[TagTreeNode!]")]
    #[case("TagTreeNode", "mainTag", "String!")]
    #[case("TagTreeNode", "subTags", "[String!]")]
    fn field_signatures(#[case] type_name: &str, #[case] field: &str, #[case] expected: &str) {
        let document = parse_schema(assemble()).unwrap();
        assert_eq!(field_type(&document, type_name, field), expected);
    }

    #[test]
    fn tree_takes_optional_query_argument() {
        let document = parse_schema(assemble()).unwrap();
        let (_, _, arguments) = signatures(find_type(&document, "Tags"))
            .into_iter()
            .find(|(name, _, _)| name == "tree")
            .unwrap();

        assert_eq!(arguments, vec![("query".to_string(), "String".to_string())]);
    }

    #[test]
    fn keeps_documentation_comments() {
        let sdl = assemble();

        assert!(sdl.contains("# Containing mainTags and tagTree."));
        assert!(sdl.contains("# Main tags are predefined manually."));
        assert!(sdl.contains("# Either this field or 'after' is required."));
        assert!(sdl.contains("# An empty string means slice to the end."));
    }
}
