use fastbin_types::serde::CodecConfig;

pub const ENV_VAR_CHUNK_SIZE: &str = "FASTBIN_CHUNK_SIZE";

pub const ENV_VAR_BENCH_ITERS: &str = "FASTBIN_BENCH_ITERS";

pub const ENV_VAR_STRING_LIMIT: &str = "FASTBIN_STRING_LIMIT";

pub const ENV_VAR_CONTAINER_LIMIT: &str = "FASTBIN_CONTAINER_LIMIT";

pub const DEFAULT_BENCH_ITERS: u32 = 25000;

pub fn codec_config(string_limit: Option<usize>, container_limit: Option<usize>) -> CodecConfig {
    CodecConfig {
        string_limit,
        container_limit,
        ..CodecConfig::default()
    }
}
