use std::collections::HashSet;

use utterbank_types::{Example, value_signature};

/// Decides which freshly prepared examples become canonical before
/// they are stored.
///
/// `existing` is the scope's current contents; `fresh` is the prepared
/// batch. Implementations return the batch with canonical flags
/// settled. Examples without an intent are outside canonical
/// bookkeeping and must come back untouched.
pub trait CanonicalPolicy: Send + Sync {
    fn assign(&self, fresh: Vec<Example>, existing: &[Example]) -> Vec<Example>;
}

/// Default policy: the first example of a group wins the canonical
/// slot.
///
/// A group is keyed by (intent, value signature). Groups that already
/// have a canonical holder in the store keep it; within the batch, the
/// first member of a new group is promoted and later members are
/// demoted, caller flags notwithstanding, so a batch can never
/// introduce two canonicals for one group.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOfGroupPolicy;

type GroupKey = (String, Vec<(String, String)>);

fn group_key(intent: &str, example: &Example) -> GroupKey {
    (intent.to_string(), value_signature(&example.entities))
}

impl CanonicalPolicy for FirstOfGroupPolicy {
    fn assign(&self, mut fresh: Vec<Example>, existing: &[Example]) -> Vec<Example> {
        let mut taken: HashSet<GroupKey> = HashSet::new();
        for example in existing {
            if let Some(intent) = &example.intent
                && example.metadata.canonical
            {
                taken.insert(group_key(intent, example));
            }
        }

        for example in &mut fresh {
            let Some(intent) = example.intent.clone() else {
                continue;
            };
            let key = group_key(&intent, example);
            if taken.contains(&key) {
                example.metadata.canonical = false;
            } else {
                example.metadata.canonical = true;
                taken.insert(key);
            }
        }

        fresh
    }
}
