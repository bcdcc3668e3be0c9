// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;

use crate::errors::TagError;
use crate::tags::TagTreeNode;

/// Sub tags indexed by the main tag they were used with.
type SubTagIndex = HashMap<String, BTreeSet<String>>;

/// Thread-safe, in-memory store of the tag taxonomy.
///
/// Main and recommended tags are curated manually and fixed for the lifetime of the store. The
/// tag tree grows whenever sub tags get recorded together with one of the main tags.
#[derive(Clone, Debug)]
pub struct TagStore {
    main_tags: Arc<Vec<String>>,
    recommended: Arc<Vec<String>>,
    sub_tags: Arc<RwLock<SubTagIndex>>,
}

impl TagStore {
    /// Returns a new store, seeding the tag tree with the given nodes.
    pub fn new(
        main_tags: Vec<String>,
        recommended: Vec<String>,
        seed: Vec<TagTreeNode>,
    ) -> Result<Self, TagError> {
        let main_tags = main_tags
            .iter()
            .map(|tag| normalize(tag))
            .collect::<Result<Vec<String>, TagError>>()?;

        for (index, tag) in main_tags.iter().enumerate() {
            if main_tags[..index].contains(tag) {
                return Err(TagError::DuplicateMainTag(tag.clone()));
            }
        }

        let recommended = recommended
            .iter()
            .map(|tag| normalize(tag))
            .collect::<Result<Vec<String>, TagError>>()?;

        let mut index: SubTagIndex = main_tags
            .iter()
            .map(|tag| (tag.clone(), BTreeSet::new()))
            .collect();

        for node in seed {
            insert(&main_tags, &mut index, &node.main_tag, &node.sub_tags)?;
        }

        Ok(Self {
            main_tags: Arc::new(main_tags),
            recommended: Arc::new(recommended),
            sub_tags: Arc::new(RwLock::new(index)),
        })
    }

    /// Main tags in the order they were configured.
    pub fn main_tags(&self) -> Vec<String> {
        self.main_tags.as_ref().clone()
    }

    /// Recommended tags, falling back to the main tags when none were picked.
    pub fn recommended(&self) -> Vec<String> {
        if self.recommended.is_empty() {
            self.main_tags()
        } else {
            self.recommended.as_ref().clone()
        }
    }

    /// Records that the given sub tags were used together with a main tag.
    pub async fn add<S: AsRef<str>>(&self, main_tag: &str, sub_tags: &[S]) -> Result<(), TagError> {
        let mut index = self.sub_tags.write().await;
        insert(&self.main_tags, &mut index, main_tag, sub_tags)
    }

    /// Returns the tag tree, one node per main tag in configured order.
    ///
    /// An empty query returns the whole tree. Otherwise matching is a case-insensitive substring
    /// search: nodes with a matching main tag are kept as they are, all other nodes are reduced
    /// to their matching sub tags and dropped when none are left.
    pub async fn tree(&self, query: &str) -> Vec<TagTreeNode> {
        let index = self.sub_tags.read().await;
        let query = query.trim().to_lowercase();

        self.main_tags
            .iter()
            .filter_map(|main_tag| {
                let mut node = TagTreeNode {
                    main_tag: main_tag.clone(),
                    sub_tags: index
                        .get(main_tag)
                        .map(|sub_tags| sub_tags.iter().cloned().collect())
                        .unwrap_or_default(),
                };

                if query.is_empty() || node.main_tag_matches(&query) {
                    return Some(node);
                }

                node.retain_matching(&query);

                if node.sub_tags.is_empty() {
                    None
                } else {
                    Some(node)
                }
            })
            .collect()
    }
}

/// Trims a tag and makes sure it is not empty.
fn normalize(tag: &str) -> Result<String, TagError> {
    let tag = tag.trim();

    if tag.is_empty() {
        Err(TagError::EmptyTag)
    } else {
        Ok(tag.to_owned())
    }
}

fn insert<S: AsRef<str>>(
    main_tags: &[String],
    index: &mut SubTagIndex,
    main_tag: &str,
    sub_tags: &[S],
) -> Result<(), TagError> {
    let main_tag = normalize(main_tag)?;

    if !main_tags.contains(&main_tag) {
        return Err(TagError::UnknownMainTag(main_tag));
    }

    // Validate everything first so a failing tag does not leave a partial update behind
    let sub_tags = sub_tags
        .iter()
        .map(|tag| {
            let tag = normalize(tag.as_ref())?;

            if main_tags.contains(&tag) {
                Err(TagError::MainTagAsSubTag(tag))
            } else {
                Ok(tag)
            }
        })
        .collect::<Result<Vec<String>, TagError>>()?;

    debug!("Add sub tags {:?} to main tag '{}'", sub_tags, main_tag);

    index.entry(main_tag).or_default().extend(sub_tags);

    Ok(())
}
