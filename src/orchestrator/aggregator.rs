// Tue Aug 04 2026 - Alex

use crate::orchestrator::discovery::DiscoveryTask;
use crate::orchestrator::scheduler::PoolTask;
use crate::plugin::DiscoveredPlugin;
use std::sync::Arc;

// Keeps the batch in submission order so the merge after the pool's
// completion barrier is deterministic regardless of completion order.
pub struct ResultAggregator {
    tasks: Vec<Arc<DiscoveryTask>>,
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn add_task(&mut self, task: DiscoveryTask) {
        self.tasks.push(Arc::new(task));
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn pool_tasks(&self) -> Vec<PoolTask> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| PoolTask::new(index as u64, task.archive().file_name(), task.job()))
            .collect()
    }

    pub fn drain_into(&self, plugins: &mut Vec<DiscoveredPlugin>) -> usize {
        let mut added = 0;
        for task in &self.tasks {
            let mut results = task.take_results();
            added += results.len();
            plugins.append(&mut results);
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ArchiveRef;
    use crate::orchestrator::scheduler::WorkerPool;
    use crate::plugin::Plugin;
    use crate::resolve::RegistryResolver;
    use std::any::Any;
    use std::fs::File;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use std::time::Duration;
    use zip::write::SimpleFileOptions;

    struct NamedPlugin(&'static str);

    impl Plugin for NamedPlugin {
        fn name(&self) -> &str {
            self.0
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn make_foo() -> Box<dyn Plugin> {
        Box::new(NamedPlugin("com.example.impl.Foo"))
    }

    fn make_bar() -> Box<dyn Plugin> {
        Box::new(NamedPlugin("com.example.impl.Bar"))
    }

    fn temp_dir(tag: &str) -> PathBuf {
        let dir =
            std::env::temp_dir().join(format!("apl-aggregator-{}-{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_archive(path: &Path, entries: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            writer.start_file(name.to_string(), options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_drain_preserves_submission_order() {
        let dir = temp_dir("order");
        let first = dir.join("first.jar");
        let second = dir.join("second.jar");
        write_archive(
            &first,
            &[(
                "meta-inf/services/com.example.impl.Foo",
                "com.example.Plugin\n",
            )],
        );
        write_archive(
            &second,
            &[(
                "meta-inf/services/com.example.impl.Bar",
                "com.example.Plugin\n",
            )],
        );

        let registry = RegistryResolver::new();
        registry.register("com.example.impl.Foo", make_foo);
        registry.register("com.example.impl.Bar", make_bar);
        let resolver = Arc::new(registry);

        let mut aggregator = ResultAggregator::new();
        aggregator.add_task(DiscoveryTask::new(
            ArchiveRef::new(&first, "jar"),
            "com.example.Plugin",
            resolver.clone(),
        ));
        aggregator.add_task(DiscoveryTask::new(
            ArchiveRef::new(&second, "jar"),
            "com.example.Plugin",
            resolver,
        ));

        let pool = WorkerPool::with_poll_interval(1, Duration::from_millis(5));
        pool.submit(aggregator.pool_tasks());
        pool.wait_until_done();

        let mut plugins = Vec::new();
        let added = aggregator.drain_into(&mut plugins);
        assert_eq!(added, 2);
        assert_eq!(plugins[0].symbol(), "com.example.impl.Foo");
        assert_eq!(plugins[1].symbol(), "com.example.impl.Bar");
    }

    #[test]
    fn test_drain_appends_to_existing_collection() {
        let aggregator = ResultAggregator::new();
        let mut plugins = vec![DiscoveredPlugin::new(
            ArchiveRef::new("/plugins/old.jar", "jar"),
            "com.example.impl.Old",
            Box::new(NamedPlugin("com.example.impl.Old")),
        )];

        let added = aggregator.drain_into(&mut plugins);
        assert_eq!(added, 0);
        assert_eq!(plugins.len(), 1);
    }
}
