use crate::model::Layer;
use std::fmt::Write;

/// Stage every generated layer chain starts from.
pub const BASE_STAGE: &str = "base-system";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerfileOptions {
    pub platform: String,
    pub base_image: String,
}

impl Default for DockerfileOptions {
    fn default() -> Self {
        Self {
            platform: "linux/arm64".to_string(),
            base_image: "ubuntu:22.04".to_string(),
        }
    }
}

const PREAMBLE: &str = r#"# Auto-Generated Time-Optimized Dockerfile
# Generated by layer-planner

FROM --platform=__PLATFORM__ __BASE_IMAGE__ AS base-system

ENV DEBIAN_FRONTEND=noninteractive
ENV TZ=UTC
ENV CFLAGS="-w -O2"
ENV CXXFLAGS="-w -O2"
ENV CPPFLAGS="-w"
ENV LDFLAGS="-w"

# Build environment
ENV FFMPEG_BUILD_ROOT=/opt/ffmpeg
ENV SOURCE_DIR=/opt/ffmpeg/source
ENV PKG_CONFIG_PATH=/opt/ffmpeg/lib/pkgconfig

# System dependencies (baseline)
RUN apt-get update && apt-get install -y \
    build-essential curl git cmake ninja-build nasm yasm \
    pkg-config autoconf automake libtool meson python3 \
    python3-pip wget ca-certificates && \
    rm -rf /var/lib/apt/lists/* && \
    mkdir -p "$FFMPEG_BUILD_ROOT" "$SOURCE_DIR"

WORKDIR $SOURCE_DIR

"#;

const CLOSING: &str = r#"
# === FFMPEG FINAL ===
FROM __PREV_STAGE__ AS ffmpeg-final

COPY scripts/ /scripts/
RUN chmod +x /scripts/*.sh

RUN echo "Building FFmpeg..." && \
    git clone --depth 1 https://git.ffmpeg.org/ffmpeg.git && \
    cd ffmpeg && \
    /scripts/configure-ffmpeg.sh && \
    make -j$(nproc) && make install && \
    echo "FFmpeg complete"

# Production image
FROM --platform=__PLATFORM__ __BASE_IMAGE__ AS production

COPY --from=ffmpeg-final /opt/ffmpeg /opt/ffmpeg
COPY scripts/docker-entrypoint.sh /entrypoint.sh
RUN chmod +x /entrypoint.sh

WORKDIR /opt/ffmpeg
ENTRYPOINT ["/entrypoint.sh"]
CMD ["ffmpeg", "-version"]
"#;

/// Render a multi-stage build file with one stage per layer.
///
/// Stages form a linear chain: each one is based on the stage before it,
/// starting from [`BASE_STAGE`]. Build commands are left as TODO comments for
/// a human to fill in.
pub fn render_dockerfile(layers: &[Layer], opts: &DockerfileOptions) -> String {
    let mut out = PREAMBLE
        .replace("__PLATFORM__", &opts.platform)
        .replace("__BASE_IMAGE__", &opts.base_image);

    let mut prev_stage = BASE_STAGE.to_string();
    for layer in layers {
        let stage = layer.stage_name();
        // Writing to a String cannot fail.
        let _ = writeln!(out);
        let _ = writeln!(out, "# === {} ===", layer.name.to_uppercase());
        let _ = writeln!(
            out,
            "# Components: {}, Total time: {:.1}s",
            layer.components.len(),
            layer.total_duration()
        );
        let _ = writeln!(out, "FROM {} AS {}", prev_stage, stage);
        let _ = writeln!(out);
        for component in &layer.components {
            let _ = writeln!(
                out,
                "# TODO: Add build commands for {} ({:.1}s)",
                component.name, component.duration
            );
        }
        let _ = writeln!(out);
        prev_stage = stage;
    }

    out.push_str(
        &CLOSING
            .replace("__PREV_STAGE__", &prev_stage)
            .replace("__PLATFORM__", &opts.platform)
            .replace("__BASE_IMAGE__", &opts.base_image),
    );
    out
}
