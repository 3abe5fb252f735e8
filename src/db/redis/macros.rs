/// Read-through caching around an async computation.
///
/// Returns the cached value for `$key` when present. Otherwise awaits `$block`
/// (which must resolve to an `AppResult`), queues the value for a background
/// write with `$ttl` seconds to live, and returns it.
///
/// Must be used inside a function returning `AppResult`, since cache read
/// errors are propagated with `?`.
///
/// ```rust,ignore
/// let genres: Vec<Genre> = cached!(cache, CacheKey::GenreDirectory, 3600, async move {
///     load_genres(&pool).await
/// })?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        let key = $key;
        if let Some(hit) = $cache.get_from_cache(&key).await? {
            Ok(hit)
        } else {
            let value = $block.await?;
            $cache.set_in_background(&key, &value, $ttl);
            Ok(value)
        }
    }};
}
