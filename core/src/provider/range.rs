use crate::engine::assembler::{IdCollector, assemble, distinct_ids};
use crate::engine::mutator::{check_record, index_mutation, removal_mutation};
use crate::engine::planner::intersect;
use crate::engine::{KeyRange, QueryPlan, plan};
use crate::provider::{Provider, ProviderError};
use crate::store::OrderedStore;
use crate::types::{EntryId, IndexOptions, Namespace, QueryOptions, SearchResult};

/// [`Provider`] over any [`OrderedStore`], using the composite-key index.
///
/// Index and delete hand the store a builder through [`OrderedStore::replace`],
/// so the previous entry's keys are removed under the same write that adds the
/// new ones.
pub struct RangeProvider<S> {
    store: S,
}

impl<S: OrderedStore> RangeProvider<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn run(
        &self,
        namespace: &Namespace,
        plan: QueryPlan,
        options: &QueryOptions,
    ) -> Result<Vec<(EntryId, f64)>, ProviderError> {
        let positional = options.strategy.is_positional();

        match plan {
            QueryPlan::Empty => Ok(Vec::new()),
            QueryPlan::Range { token, scan_limit } => {
                // Pages continue past duplicates and low-scored hits until the
                // cap is met or the range runs out.
                let mut collector =
                    IdCollector::new(positional, options.min_score, options.max_results);
                let mut range = KeyRange::prefix(&token);
                loop {
                    let hits = self.store.scan(namespace, &range, Some(scan_limit))?;
                    collector.extend(&hits);
                    if collector.is_full() || hits.len() < scan_limit {
                        break;
                    }
                    let Some((last, _)) = hits.last() else {
                        break;
                    };
                    range = range.after(last);
                }
                Ok(collector.into_ids())
            }
            QueryPlan::SlidingWindow { windows } => {
                let mut sets = Vec::with_capacity(windows.len());
                for window in &windows {
                    let hits = self.store.scan(namespace, &KeyRange::prefix(window), None)?;
                    let ids = distinct_ids(&hits, positional, options.min_score, usize::MAX);
                    if ids.is_empty() {
                        tracing::debug!(%window, "window has no match");
                        return Ok(Vec::new());
                    }
                    sets.push(ids);
                }
                Ok(intersect(sets, options.max_results))
            }
        }
    }
}

impl<S: OrderedStore> Provider for RangeProvider<S> {
    fn index(
        &self,
        namespace: &Namespace,
        id: &EntryId,
        text: &str,
        display: &str,
        options: &IndexOptions,
    ) -> Result<(), ProviderError> {
        check_record(text, display)?;

        self.store.replace(namespace, id, &|previous| {
            let mutation = index_mutation(id, text, display, options, previous);
            tracing::debug!(
                %namespace,
                %id,
                strategy = %options.strategy,
                removed = mutation.remove_keys.len(),
                inserted = mutation.insert_keys.len(),
                "indexing entry"
            );
            mutation
        })?;
        Ok(())
    }

    fn query(
        &self,
        namespace: &Namespace,
        query: &str,
        options: &QueryOptions,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        let plan = plan(query, options);
        let ids = self.run(namespace, plan, options)?;
        let results = assemble(&self.store, namespace, ids)?;

        tracing::debug!(%namespace, query, hits = results.len(), "query");
        Ok(results)
    }

    fn delete(&self, namespace: &Namespace, id: &EntryId) -> Result<(), ProviderError> {
        self.store.replace(namespace, id, &|previous| {
            let mutation = removal_mutation(id, previous);
            tracing::debug!(%namespace, %id, removed = mutation.remove_keys.len(), "deleting entry");
            mutation
        })?;
        Ok(())
    }

    fn delete_all(&self, namespace: &Namespace) -> Result<(), ProviderError> {
        tracing::info!(%namespace, "deleting all entries");
        self.store.clear(namespace)?;
        Ok(())
    }

    fn close(&self) -> Result<(), ProviderError> {
        self.store.close()?;
        Ok(())
    }
}
