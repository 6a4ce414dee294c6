use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::nav::Nav;
use crate::components::reveal::Reveal;
use crate::config;
use crate::hooks::parallax::use_parallax;
use crate::state::{PageAction, PageView, UseCaseTab};

struct Feature {
    icon: &'static str,
    accent: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🎛",
        accent: "accent-cyan",
        title: "RTX Enabled GPUs",
        description: "Access the latest NVIDIA RTX GPUs for ray-tracing, AI rendering, and heavy computation workloads.",
    },
    Feature {
        icon: "⚡",
        accent: "accent-yellow",
        title: "Low Latency Streaming",
        description: "Our proprietary protocol delivers up to 4K 60FPS with sub-millisecond input delay.",
    },
    Feature {
        icon: "🌐",
        accent: "accent-blue",
        title: "Global Coverage",
        description: "23+ Data centers worldwide ensure you are always close to your personal workstation.",
    },
    Feature {
        icon: "🛡",
        accent: "accent-green",
        title: "Encrypted & Isolated",
        description: "Your data is yours. Every machine is an isolated VM with AES-256 encrypted connections.",
    },
    Feature {
        icon: "💾",
        accent: "accent-purple",
        title: "Scalable Storage",
        description: "Expand your SSD storage on the fly. Keep your heavy assets in the cloud, accessible anywhere.",
    },
    Feature {
        icon: "👥",
        accent: "accent-pink",
        title: "Team Workspaces",
        description: "Onboard freelancers or team members in seconds with pre-configured environments.",
    },
];

struct Step {
    number: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        number: "01",
        icon: "👥",
        title: "Create Account",
        description: "Sign up in seconds. No lengthy verification or hardware deposits required.",
    },
    Step {
        number: "02",
        icon: "⚙",
        title: "Choose Config",
        description: "Select from Starter, Pro, or Studio tiers based on your workflow needs.",
    },
    Step {
        number: "03",
        icon: "⚡",
        title: "Connect & Create",
        description: "Launch your desktop in the browser or via our native app. Zero latency.",
    },
];

const MARQUEE_TOOLS: [&str; 12] = [
    "Unreal Engine 5",
    "Blender",
    "Adobe After Effects",
    "Unity",
    "Maya",
    "TensorFlow",
    "PyTorch",
    "Cinema 4D",
    "Houdini",
    "VS Code",
    "Docker",
    "Kubernetes",
];

struct BenchmarkRow {
    label: &'static str,
    value: &'static str,
    width_pct: u32,
    icon: &'static str,
    highlight: bool,
}

const BENCHMARKS: [BenchmarkRow; 4] = [
    BenchmarkRow {
        label: "Personal PC (Studio Tier)",
        value: "42s",
        width_pct: 15,
        icon: "🖥",
        highlight: true,
    },
    BenchmarkRow {
        label: "High-End Gaming Laptop (RTX 4070)",
        value: "184s",
        width_pct: 55,
        icon: "💻",
        highlight: false,
    },
    BenchmarkRow {
        label: "MacBook Pro M3 Max",
        value: "112s",
        width_pct: 35,
        icon: "💻",
        highlight: false,
    },
    BenchmarkRow {
        label: "Average Ultrabook",
        value: "840s",
        width_pct: 100,
        icon: "💻",
        highlight: false,
    },
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "I rendered a 4,000 frame animation in 2 hours. My laptop would have taken 3 days. This is actual magic.",
        name: "Sarah Jenkins",
        role: "3D Artist",
    },
    Testimonial {
        quote: "The latency is basically non-existent. I forget I'm streaming. It feels exactly like a local rig.",
        name: "David Chen",
        role: "Game Developer",
    },
    Testimonial {
        quote: "Being able to spin up a 24GB VRAM instance for LLM training on my iPad is a game changer for my workflow.",
        name: "Elena Rodriguez",
        role: "AI Researcher",
    },
];

const FAQS: [(&str, &str); 4] = [
    (
        "Do I need a fast internet connection?",
        "We recommend at least 15 Mbps for 1080p and 50 Mbps for 4K streaming. Our adaptive bitrate technology ensures smooth performance even on fluctuating connections.",
    ),
    (
        "Can I install my own software?",
        "Absolutely. You get full administrator access to a Windows or Linux environment. Install Steam, Adobe Suite, Blender, VS Code, or any custom enterprise software.",
    ),
    (
        "Is my data persistent?",
        "Yes. Your storage drive persists between sessions. When you shut down your Personal PC, your files are encrypted and stored safely until you launch it again.",
    ),
    (
        "What happens if I forget to shut down?",
        "You can set auto-shutdown timers to prevent accidental charges. We also send notifications if your machine has been idle for an extended period.",
    ),
];

#[function_component(Hero)]
fn hero() -> Html {
    let parallax = use_parallax(config::HERO_PARALLAX_SENSITIVITY);

    let rig_style = format!(
        "transform: rotateY({:.3}deg) rotateX({:.3}deg);",
        parallax.x, -parallax.y
    );
    // The chips drift against and with the rig at their own scale.
    let chip_server_style = format!(
        "transform: translateZ(50px) translateX({:.3}px) translateY({:.3}px);",
        -parallax.x * 1.5,
        -parallax.y * 1.5
    );
    let chip_cpu_style = format!(
        "transform: translateZ(30px) translateX({:.3}px) translateY({:.3}px);",
        parallax.x * 1.2,
        parallax.y * 1.2
    );

    html! {
        <section id="top" class="hero">
            <div class="hero-backdrop">
                <div class="grid-floor">
                    <div class="grid-lines animate-grid"></div>
                </div>
                <div class="spotlight"></div>
            </div>

            <div class="hero-inner">
                <div class="hero-copy">
                    <Reveal>
                        <div class="hero-badge">
                            <span class="badge-dot">
                                <span class="badge-ping"></span>
                            </span>
                            <span class="badge-text">
                                <span class="badge-new">{"New:"}</span>
                                {" 24GB VRAM Instances Live"}
                            </span>
                        </div>
                    </Reveal>

                    <Reveal delay_ms={100}>
                        <h1 class="hero-title">
                            {"Infinite"} <br />
                            <span class="hero-glow-text">{"Computing."}</span>
                        </h1>
                    </Reveal>

                    <Reveal delay_ms={200}>
                        <p class="hero-subtitle">
                            {"Abandon hardware limitations. Stream a supercomputer to your browser with "}
                            <span class="subtitle-strong">{"zero latency"}</span>
                            {". Perfect for 3D rendering, ML training, and AAA gaming."}
                        </p>
                    </Reveal>

                    <Reveal delay_ms={300}>
                        <div class="hero-cta-row">
                            <button class="hero-cta-primary">
                                {"Start Free Trial"} <span class="cta-arrow">{"›"}</span>
                            </button>
                            <button class="hero-cta-ghost">
                                <span class="play-glyph">{"▶"}</span> {"See It In Action"}
                            </button>
                        </div>
                    </Reveal>

                    <Reveal delay_ms={400}>
                        <div class="hero-trust-row">
                            <div class="trust-item">
                                <span class="trust-check">{"✔"}</span>
                                <span>{"No credit card required"}</span>
                            </div>
                            <div class="trust-item">
                                <span class="trust-check">{"✔"}</span>
                                <span>{"Cancel anytime"}</span>
                            </div>
                        </div>
                    </Reveal>
                </div>

                <div class="hero-visual">
                    <div class="rig" style={rig_style}>
                        <div class="rig-glow animate-pulse-glow"></div>

                        <div class="terminal animate-float">
                            <div class="terminal-bar">
                                <div class="terminal-dots">
                                    <span class="dot dot-red"></span>
                                    <span class="dot dot-yellow"></span>
                                    <span class="dot dot-green"></span>
                                </div>
                                <div class="terminal-secure">
                                    {"🛡 SECURE_CONNECTION_ESTABLISHED"}
                                </div>
                            </div>

                            <div class="terminal-body">
                                <div class="prompt-line">
                                    <span class="prompt-arrow">{"➜"}</span>
                                    <span class="prompt-path">{"~"}</span>
                                    <span class="prompt-cmd">{"personal-pc init --gpu=rtx4090"}</span>
                                </div>
                                <div class="boot-log">
                                    <div>{"[INFO] Allocating isolated environment..."}</div>
                                    <div>
                                        {"[INFO] Mounting 2TB NVMe Storage... "}
                                        <span class="log-ok">{"DONE (0.2s)"}</span>
                                    </div>
                                    <div>
                                        {"[INFO] Initializing NVIDIA Drivers v535.86... "}
                                        <span class="log-ok">{"DONE"}</span>
                                    </div>
                                </div>
                                <div class="prompt-line">
                                    <span class="prompt-arrow">{"➜"}</span>
                                    <span class="prompt-path">{"~"}</span>
                                    <span class="prompt-cmd">{"./run-benchmark.sh"}</span>
                                </div>

                                <div class="stats-panel">
                                    <div class="stats-grid">
                                        <div class="stat">
                                            <div class="stat-label">{"GPU Load"}</div>
                                            <div class="stat-value">
                                                {"98"}<span class="stat-unit">{"%"}</span>
                                            </div>
                                            <div class="stat-meter">
                                                <div class="meter-fill meter-gpu"></div>
                                            </div>
                                        </div>
                                        <div class="stat">
                                            <div class="stat-label">{"Memory"}</div>
                                            <div class="stat-value">
                                                {"18.4"}<span class="stat-unit">{"GB"}</span>
                                            </div>
                                            <div class="stat-meter">
                                                <div class="meter-fill meter-mem"></div>
                                            </div>
                                        </div>
                                    </div>
                                    <div class="stats-footer">
                                        <span>{"FPS: "}<span class="stat-good">{"144"}</span></span>
                                        <span>{"Latency: "}<span class="stat-good">{"12ms"}</span></span>
                                    </div>
                                </div>

                                <div class="scanline"></div>
                            </div>
                        </div>

                        <div class="float-chip chip-server" style={chip_server_style}>{"🗄"}</div>
                        <div class="float-chip chip-cpu" style={chip_cpu_style}>{"⚙"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Marquee)]
fn marquee() -> Html {
    html! {
        <section class="marquee-section">
            <p class="marquee-heading">{"Powering Workflows In"}</p>
            <div class="marquee-viewport">
                <div class="marquee-track animate-marquee">
                    {
                        // Two copies back to back so the loop never shows a seam.
                        MARQUEE_TOOLS.iter().chain(MARQUEE_TOOLS.iter()).enumerate().map(|(i, &tool)| html! {
                            <div key={i} class="marquee-item">
                                <span>{tool}</span>
                                <span class="marquee-dot"></span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="marquee-fade marquee-fade-left"></div>
                <div class="marquee-fade marquee-fade-right"></div>
            </div>
        </section>
    }
}

#[function_component(Steps)]
fn steps() -> Html {
    html! {
        <section id="steps" class="steps-section">
            <Reveal>
                <div class="section-heading">
                    <h2>{"Launch Your Supercomputer"}</h2>
                    <p>{"Go from signup to a fully powerful desktop in under 60 seconds."}</p>
                </div>
            </Reveal>

            <div class="steps-grid">
                <div class="steps-line"></div>
                {
                    STEPS.iter().enumerate().map(|(i, step)| html! {
                        <Reveal key={step.number} delay_ms={(i as u32) * 100} class="step-cell">
                            <div class="step-card">
                                <div class="step-icon">{step.icon}</div>
                                <div class="step-head">
                                    <span class="step-number">{step.number}</span>
                                    <h3 class="step-title">{step.title}</h3>
                                </div>
                                <p class="step-desc">{step.description}</p>
                            </div>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(FeaturesGrid)]
fn features_grid() -> Html {
    html! {
        <section id="features" class="features-section">
            <Reveal>
                <div class="section-heading">
                    <h2>{"Features that scale"}</h2>
                </div>
            </Reveal>

            <div class="features-grid">
                {
                    FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <Reveal key={feature.title} delay_ms={(i as u32) * 100} class="feature-cell">
                            <div class="feature-card glass-panel glass-card-hover">
                                <div class={classes!("feature-icon", feature.accent)}>
                                    {feature.icon}
                                </div>
                                <h3 class="feature-title">{feature.title}</h3>
                                <p class="feature-desc">{feature.description}</p>
                            </div>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct UseCasesProps {
    active_tab: UseCaseTab,
    on_select: Callback<UseCaseTab>,
}

#[function_component(UseCases)]
fn use_cases(props: &UseCasesProps) -> Html {
    let tab = props.active_tab;
    let accent = match tab {
        UseCaseTab::Creators => "creators",
        UseCaseTab::Engineers => "engineers",
    };

    let select = |target: UseCaseTab| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(target))
    };

    html! {
        <section id="solutions" class={classes!("usecases-section", accent)}>
            <div class="usecase-glows">
                <div class={classes!(
                    "usecase-glow", "glow-creators",
                    (tab == UseCaseTab::Creators).then(|| "active"),
                )}></div>
                <div class={classes!(
                    "usecase-glow", "glow-engineers",
                    (tab == UseCaseTab::Engineers).then(|| "active"),
                )}></div>
            </div>

            <Reveal>
                <div class="section-heading">
                    <h2 class="usecase-heading">
                        {"One Platform."} <br />
                        <span class="gradient-word animate-gradient-x">{"Infinite Possibilities."}</span>
                    </h2>

                    <div class="tab-pill">
                        <div class="tab-slider"></div>
                        <button
                            class={classes!("tab-button", (tab == UseCaseTab::Creators).then(|| "active"))}
                            onclick={select(UseCaseTab::Creators)}
                        >
                            {"🖼 For Creators"}
                        </button>
                        <button
                            class={classes!("tab-button", (tab == UseCaseTab::Engineers).then(|| "active"))}
                            onclick={select(UseCaseTab::Engineers)}
                        >
                            {"⌨ For Engineers"}
                        </button>
                    </div>
                </div>
            </Reveal>

            <div class="usecase-grid">
                <div class="usecase-copy">
                    {
                        match tab {
                            UseCaseTab::Creators => html! {
                                <Reveal delay_ms={100}>
                                    <div class="usecase-icon">{"📦"}</div>
                                    <h3>{"Accelerate your Creative Suite"}</h3>
                                    <p>
                                        {"Running After Effects, Blender, or Premiere Pro on a laptop? \
                                          Stop waiting for render bars. Personal PC gives you desktop-class \
                                          power on the go."}
                                    </p>
                                    <ul class="check-list">
                                        <li class="check-item"><span class="check-bullet">{"✔"}</span>{"Render 10x faster with cloud GPUs"}</li>
                                        <li class="check-item"><span class="check-bullet">{"✔"}</span>{"Edit 8K footage without proxies"}</li>
                                        <li class="check-item"><span class="check-bullet">{"✔"}</span>{"Collaborate on large assets instantly"}</li>
                                    </ul>
                                    <button class="usecase-link">{"Explore Creative Workflows →"}</button>
                                </Reveal>
                            },
                            UseCaseTab::Engineers => html! {
                                <Reveal delay_ms={100}>
                                    <div class="usecase-icon">{"⌨"}</div>
                                    <h3>{"Compile Faster. Build More."}</h3>
                                    <p>
                                        {"Perfect for game development, data science, and heavy compilation \
                                          tasks. Spin up a fresh environment for every project in seconds."}
                                    </p>
                                    <ul class="check-list">
                                        <li class="check-item"><span class="check-bullet">{"✔"}</span>{"Unreal Engine 5 & Unity ready"}</li>
                                        <li class="check-item"><span class="check-bullet">{"✔"}</span>{"Linux & Windows dual-boot options"}</li>
                                        <li class="check-item"><span class="check-bullet">{"✔"}</span>{"Scalable cores for data processing"}</li>
                                    </ul>
                                    <button class="usecase-link">{"Explore Engineering Docs →"}</button>
                                </Reveal>
                            },
                        }
                    }
                </div>

                <div class="usecase-visual">
                    <Reveal delay_ms={200}>
                        <div class="viewport-glow"></div>
                        <div class="browser-frame glass-panel">
                            <div class="browser-bar">
                                <div class="terminal-dots">
                                    <span class="dot dot-grey"></span>
                                    <span class="dot dot-grey"></span>
                                    <span class="dot dot-grey"></span>
                                </div>
                                <div class="browser-address">
                                    {"🛡 "}
                                    {
                                        match tab {
                                            UseCaseTab::Creators => "blender-cloud-session-01",
                                            UseCaseTab::Engineers => "root@skydc-instance-dev",
                                        }
                                    }
                                </div>
                            </div>

                            {
                                match tab {
                                    UseCaseTab::Creators => html! {
                                        <div class="viewport render-view">
                                            <div class="viewport-grid"></div>
                                            <div class="render-art"></div>
                                            <div class="viewport-hud">
                                                <div class="hud-left">
                                                    <div>{"Perspective"}</div>
                                                    <div>{"(1) Collection | Camera"}</div>
                                                </div>
                                                <div class="hud-right">
                                                    <div>{"FPS: 60"}</div>
                                                    <div>{"Mem: 14.2 GB"}</div>
                                                </div>
                                            </div>
                                            <div class="render-progress">
                                                <div class="progress-labels">
                                                    <span>{"Rendering Frame 104/500"}</span>
                                                    <span>{"82%"}</span>
                                                </div>
                                                <div class="progress-track">
                                                    <div class="progress-fill"></div>
                                                </div>
                                            </div>
                                        </div>
                                    },
                                    UseCaseTab::Engineers => html! {
                                        <div class="viewport terminal-view">
                                            <div class="term-title">{"⌨ bash — 80x24"}</div>
                                            <div class="term-line">
                                                <span class="term-user">{"dev"}</span>{"@"}
                                                <span class="term-host">{"cloud"}</span>
                                                {":~$ docker-compose up -d --build"}
                                            </div>
                                            <div class="term-dim">{"Building backend service..."}</div>
                                            <div class="term-line">
                                                {"[+] Building 4.2s (12/12) "}
                                                <span class="log-ok">{"FINISHED"}</span>
                                            </div>
                                            <div class="term-indent">{"=> [internal] load build definition from Dockerfile"}</div>
                                            <div class="term-indent">{"=> [internal] load metadata for docker.io/library/python:3.9"}</div>
                                            <div class="term-dim">{"Training Model (Epoch 4/50)..."}</div>
                                            <div class="train-panel">
                                                <div class="train-labels">
                                                    <span>{"Loss: 0.2314"}</span>
                                                    <span>{"Accuracy: 94.2%"}</span>
                                                </div>
                                                <div class="progress-track">
                                                    <div class="progress-fill train-fill"></div>
                                                </div>
                                            </div>
                                            <div class="term-cursor">{"_"}</div>
                                        </div>
                                    },
                                }
                            }
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(Benchmarks)]
fn benchmarks() -> Html {
    html! {
        <section id="performance" class="benchmarks-section">
            <Reveal>
                <div class="section-heading">
                    <h2>{"Benchmarks Don't Lie"}</h2>
                    <p>{"See how our Studio tier stacks up against top-tier consumer laptops."}</p>
                    <p class="heading-footnote">
                        {"Benchmark: Blender Cycles Render (Classroom Scene) - Lower is Better"}
                    </p>
                </div>
            </Reveal>

            <div class="benchmark-panel glass-panel">
                <div class="benchmark-watermark">{"📊"}</div>
                {
                    BENCHMARKS.iter().map(|row| html! {
                        <Reveal key={row.label} class="benchmark-row">
                            <div class="benchmark-head">
                                <span class={classes!("benchmark-icon", row.highlight.then(|| "highlight"))}>
                                    {row.icon}
                                </span>
                                <span class={classes!("benchmark-label", row.highlight.then(|| "highlight"))}>
                                    {row.label}
                                </span>
                                <span class="benchmark-value">{row.value}</span>
                            </div>
                            <div class="benchmark-track">
                                <div
                                    class={classes!(
                                        "benchmark-fill", "animate-grow-bar",
                                        if row.highlight { "fill-product" } else { "fill-rival" },
                                    )}
                                    style={format!("--target-width: {}%;", row.width_pct)}
                                >
                                    { if row.highlight { html! { <div class="fill-pulse"></div> } } else { html! {} } }
                                </div>
                            </div>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="testimonials-section">
            <Reveal>
                <div class="section-heading">
                    <h2>{"Loved by the Best"}</h2>
                </div>
            </Reveal>

            <div class="testimonials-grid">
                {
                    TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <Reveal key={t.name} delay_ms={(i as u32) * 100} class="testimonial-cell">
                            <div class="testimonial-card glass-panel">
                                <div class="quote-mark">{"\u{201c}"}</div>
                                <p class="quote-text">{t.quote}</p>
                                <div class="quote-meta">
                                    <div class="avatar">{t.name.chars().next().map(String::from).unwrap_or_default()}</div>
                                    <div class="quote-who">
                                        <div class="quote-name">{t.name}</div>
                                        <div class="quote-role">{t.role}</div>
                                    </div>
                                    <div class="stars">{"★★★★★"}</div>
                                </div>
                            </div>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(TechSpecs)]
fn tech_specs() -> Html {
    html! {
        <section id="specs" class="specs-section">
            <div class="beam beam-top"></div>
            <div class="beam beam-bottom"></div>

            <Reveal>
                <div class="section-heading">
                    <span class="specs-kicker">{"Under the Hood"}</span>
                    <h2>{"The Engine Room"}</h2>
                    <p>
                        {"We've built the world's most powerful consumer cloud infrastructure. \
                          Dedicated GPUs, enterprise networking, and blistering fast storage."}
                    </p>
                </div>
            </Reveal>

            <div class="specs-grid">
                <Reveal class="spec-cell">
                    <div class="spec-card tech-card-gradient">
                        <div class="spec-card-inner">
                            <div class="spec-watermark">{"⚙"}</div>
                            <div class="spec-icon icon-green">{"⚙"}</div>
                            <h3 class="spec-title">{"Graphic Powerhouse"}</h3>
                            <div class="spec-figure figure-green">{"RTX 4090"}</div>
                            <p class="spec-desc">
                                {"The ultimate GPU for creators and gamers. 24GB GDDR6X VRAM and \
                                  16,384 CUDA cores."}
                            </p>
                            <div class="spec-meter-rows">
                                <div class="meter-labels">
                                    <span>{"Personal PC"}</span>
                                    <span class="label-green">{"100 TFLOPS"}</span>
                                </div>
                                <div class="spec-track">
                                    <div class="spec-fill fill-green"></div>
                                </div>
                                <div class="meter-labels faded">
                                    <span>{"Avg. Laptop"}</span>
                                    <span>{"10 TFLOPS"}</span>
                                </div>
                                <div class="spec-track faded">
                                    <div class="spec-fill fill-grey"></div>
                                </div>
                            </div>
                        </div>
                    </div>
                </Reveal>

                <Reveal delay_ms={100} class="spec-cell">
                    <div class="spec-card tech-card-gradient">
                        <div class="spec-card-inner">
                            <div class="spec-watermark">{"📶"}</div>
                            <div class="spec-icon icon-cyan">{"📶"}</div>
                            <h3 class="spec-title">{"Zero Latency"}</h3>
                            <div class="spec-figure figure-cyan">{"< 15ms"}</div>
                            <p class="spec-desc">
                                {"Our \"Holographic Streaming Protocol\" predicts frames before they \
                                  render, creating a feel indistinguishable from local hardware."}
                            </p>
                            <div class="spec-stats">
                                <div class="spec-stat">
                                    <div class="spec-stat-label">{"Bitrate"}</div>
                                    <div class="spec-stat-value">{"150 Mbps"}</div>
                                </div>
                                <div class="spec-stat">
                                    <div class="spec-stat-label">{"Res"}</div>
                                    <div class="spec-stat-value">{"4K / 60"}</div>
                                </div>
                            </div>
                        </div>
                    </div>
                </Reveal>

                <Reveal delay_ms={200} class="spec-cell">
                    <div class="spec-card tech-card-gradient">
                        <div class="spec-card-inner">
                            <div class="spec-watermark">{"💾"}</div>
                            <div class="spec-icon icon-purple">{"💾"}</div>
                            <h3 class="spec-title">{"Instant I/O"}</h3>
                            <div class="spec-figure figure-purple">{"7,000 MB/s"}</div>
                            <p class="spec-desc">
                                {"NVMe Gen 4 SSDs mean your projects load instantly. Expand storage \
                                  up to 8TB with a single click."}
                            </p>
                            <div class="spec-shell">
                                <div>{"$ disk_speed_test -w -r"}</div>
                                <div class="shell-result">
                                    {"Writing 5GB file... "}<span class="log-ok">{"0.8s"}</span>
                                </div>
                                <div class="shell-result">
                                    {"Reading 100GB dataset... "}<span class="log-ok">{"14.2s"}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FaqSectionProps {
    active_faq: Option<usize>,
    on_toggle: Callback<usize>,
}

#[function_component(FaqSection)]
fn faq_section(props: &FaqSectionProps) -> Html {
    html! {
        <section class="faq-section">
            <Reveal>
                <div class="section-heading">
                    <h2>{"Common Queries"}</h2>
                    <p>{"Everything you need to know about cloud computing."}</p>
                </div>
            </Reveal>

            <div class="faq-list">
                {
                    FAQS.iter().enumerate().map(|(i, &(question, answer))| {
                        let is_open = props.active_faq == Some(i);
                        let toggle = {
                            let on_toggle = props.on_toggle.clone();
                            Callback::from(move |_: MouseEvent| on_toggle.emit(i))
                        };
                        html! {
                            <Reveal key={i} delay_ms={(i as u32) * 100}>
                                <div class={classes!("faq-item", "glass-panel", is_open.then(|| "open"))}>
                                    <button class="faq-question" onclick={toggle}>
                                        <span class="faq-q-text">{question}</span>
                                        <span class="faq-chevron">{ if is_open { "▴" } else { "▾" } }</span>
                                    </button>
                                    <div class="faq-answer">
                                        <p>{answer}</p>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-backdrop"></div>
            <Reveal>
                <div class="cta-inner">
                    <h2 class="cta-title">{"Ready to upgrade your workflow?"}</h2>
                    <p class="cta-sub">
                        {"Join 10,000+ engineers and creatives building on Personal PC. Get "}
                        <span class="credit-chip">{"$20 credit"}</span>
                        {" when you sign up today."}
                    </p>
                    <div class="cta-buttons">
                        <button class="cta-primary">{"Create Free Account"}</button>
                        <button class="cta-ghost">{"View Documentation"}</button>
                    </div>
                    <p class="cta-note">{"No credit card required for trial."}</p>
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let columns: [(&str, [&str; 4]); 3] = [
        (
            "Product",
            ["Cloud Computer", "Application Streaming", "Pricing", "Performance"],
        ),
        ("Resources", ["Blog", "Help Center", "Community", "Status"]),
        ("Company", ["About Us", "Careers", "Contact", "Privacy Policy"]),
    ];

    html! {
        <footer id="footer" class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <span class="nav-logo-mark">{"🖥"}</span>
                        <span class="nav-logo-text">{"SkyDC"}</span>
                    </div>
                    <p class="footer-blurb">
                        {"High-performance cloud desktops for the modern workforce. Built for \
                          speed, security, and scale."}
                    </p>
                    <div class="social-row">
                        <div class="social-dot">{"𝕏"}</div>
                        <div class="social-dot">{"in"}</div>
                        <div class="social-dot">{"G"}</div>
                    </div>
                </div>
                {
                    columns.iter().map(|&(heading, links)| html! {
                        <div key={heading} class="footer-col">
                            <h4>{heading}</h4>
                            <ul>
                                {
                                    links.iter().map(|&link| html! {
                                        <li key={link}><a href="#top">{link}</a></li>
                                    }).collect::<Html>()
                                }
                            </ul>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <div class="footer-legal">
                <p>{"© 2024 Personal PC Inc. All rights reserved."}</p>
                <div class="legal-links">
                    <a href="#top">{"Terms"}</a>
                    <a href="#top">{"Privacy"}</a>
                    <a href="#top">{"Cookies"}</a>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let view = use_reducer_eq(PageView::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_select_tab = {
        let view = view.clone();
        Callback::from(move |tab| view.dispatch(PageAction::SelectTab(tab)))
    };
    let on_toggle_faq = {
        let view = view.clone();
        Callback::from(move |index| view.dispatch(PageAction::ToggleFaq(index)))
    };

    html! {
        <div class="landing-page">
            <div class="noise-bg"></div>

            <Nav view={view.clone()} />
            <Hero />
            <Marquee />
            <Steps />
            <FeaturesGrid />
            <UseCases active_tab={view.active_tab} on_select={on_select_tab} />
            <Benchmarks />
            <Testimonials />
            <TechSpecs />
            <FaqSection active_faq={view.active_faq} on_toggle={on_toggle_faq} />
            <CallToAction />
            <Footer />

            <style>
                {crate::styles::LANDING_CSS}
            </style>
        </div>
    }
}
