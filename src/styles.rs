//! Page stylesheet, injected by the landing component.

pub const LANDING_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    background: #020617;
    color: #f1f5f9;
    font-family: 'Inter', -apple-system, 'Segoe UI', sans-serif;
    overflow-x: hidden;
}

::selection {
    background: #06b6d4;
    color: #fff;
}

button {
    font-family: inherit;
    cursor: pointer;
}

.landing-page {
    min-height: 100vh;
    position: relative;
}

/* Keyframes */
@keyframes float {
    0% { transform: translateY(0px); }
    50% { transform: translateY(-20px); }
    100% { transform: translateY(0px); }
}
@keyframes grid-move {
    0% { background-position: 0 0; }
    100% { background-position: 50px 50px; }
}
@keyframes gradient-x {
    0%, 100% { background-size: 200% 200%; background-position: left center; }
    50% { background-size: 200% 200%; background-position: right center; }
}
@keyframes marquee {
    0% { transform: translateX(0); }
    100% { transform: translateX(-50%); }
}
@keyframes scanline {
    0% { transform: translateY(-100%); }
    100% { transform: translateY(100%); }
}
@keyframes typing {
    0% { width: 0; }
    50% { width: 82%; }
    90% { width: 82%; }
    100% { width: 0; }
}
@keyframes pulse-glow {
    0%, 100% { opacity: 0.5; transform: translate(-50%, -50%) scale(1); }
    50% { opacity: 0.8; transform: translate(-50%, -50%) scale(1.05); }
}
@keyframes grow-bar {
    0% { width: 0; }
    100% { width: var(--target-width); }
}
@keyframes shimmer {
    0% { background-position: 200% center; }
    100% { background-position: -200% center; }
}
@keyframes shine {
    to { background-position: 200% center; }
}
@keyframes ping {
    75%, 100% { transform: scale(2.5); opacity: 0; }
}
@keyframes blink {
    0%, 50% { opacity: 1; }
    51%, 100% { opacity: 0; }
}

.animate-grid { animation: grid-move 20s linear infinite; }
.animate-marquee { animation: marquee 30s linear infinite; }
.animate-gradient-x { animation: gradient-x 3s ease infinite; }
.animate-pulse-glow { animation: pulse-glow 3s ease-in-out infinite; }
.animate-float { animation: float 6s ease-in-out infinite; }
.animate-grow-bar { animation: grow-bar 1.5s ease-out forwards; }

/* Shared surfaces */
.glass-panel {
    background: rgba(15, 23, 42, 0.6);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    border: 1px solid rgba(255, 255, 255, 0.08);
    box-shadow: 0 4px 30px rgba(0, 0, 0, 0.1);
}
.glass-card-hover:hover {
    background: rgba(30, 41, 59, 0.7);
    border-color: rgba(56, 189, 248, 0.3);
    box-shadow: 0 0 30px rgba(56, 189, 248, 0.1);
}
.tech-card-gradient {
    background: linear-gradient(145deg, rgba(15, 23, 42, 0.8) 0%, rgba(30, 41, 59, 0.4) 100%);
}

.noise-bg {
    position: fixed;
    inset: 0;
    pointer-events: none;
    z-index: 50;
    opacity: 0.03;
    background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 200 200' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.65' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)'/%3E%3C/svg%3E");
}

/* Reveal wrapper */
.reveal {
    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
    will-change: opacity, transform;
}

/* Navigation */
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 40;
    padding: 1.5rem 0;
    background: transparent;
    transition: all 0.5s ease;
}
.top-nav.scrolled {
    padding: 1rem 0;
    background: rgba(2, 6, 23, 0.8);
    backdrop-filter: blur(20px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    box-shadow: 0 25px 50px rgba(30, 58, 138, 0.1);
}
.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    text-decoration: none;
}
.nav-logo-mark {
    background: linear-gradient(to top right, #2563eb, #06b6d4);
    padding: 0.4rem 0.5rem;
    border-radius: 0.5rem;
    font-size: 1.1rem;
}
.nav-logo-text {
    font-size: 1.25rem;
    font-weight: 700;
    letter-spacing: -0.02em;
    color: #fff;
    transition: color 0.3s ease;
}
.nav-logo:hover .nav-logo-text {
    color: #22d3ee;
}
.nav-links {
    display: flex;
    align-items: center;
    gap: 2rem;
}
.nav-link {
    font-size: 0.875rem;
    font-weight: 500;
    color: #94a3b8;
    text-decoration: none;
    transition: color 0.3s ease;
}
.nav-link:hover {
    color: #fff;
    filter: drop-shadow(0 0 8px rgba(255, 255, 255, 0.5));
}
.nav-actions {
    display: flex;
    align-items: center;
    gap: 1rem;
}
.nav-signin {
    font-size: 0.875rem;
    font-weight: 500;
    color: #cbd5e1;
    background: none;
    border: none;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    transition: all 0.3s ease;
}
.nav-signin:hover {
    color: #fff;
    background: rgba(255, 255, 255, 0.05);
}
.nav-cta {
    position: relative;
    overflow: hidden;
    background: #fff;
    color: #0f172a;
    padding: 0.625rem 1.5rem;
    border: none;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 700;
    transition: box-shadow 0.3s ease;
}
.nav-cta:hover {
    box-shadow: 0 0 20px rgba(255, 255, 255, 0.3);
}
.shimmer-btn:hover {
    background-image: linear-gradient(90deg, rgba(255, 255, 255, 0) 0%, rgba(56, 189, 248, 0.2) 50%, rgba(255, 255, 255, 0) 100%);
    background-size: 200% 100%;
    animation: shimmer 1.5s infinite linear;
}
.burger-menu {
    display: none;
    background: none;
    border: none;
    color: #cbd5e1;
    font-size: 1.5rem;
    padding: 0.5rem;
}
.burger-menu:hover {
    color: #fff;
}
.mobile-menu {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    width: 100%;
    background: #020617;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    padding: 1.5rem 1rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    flex-direction: column;
    gap: 1rem;
}
.mobile-link {
    font-size: 1.125rem;
    font-weight: 500;
    color: #cbd5e1;
    text-decoration: none;
    padding-left: 0.5rem;
    border-left: 2px solid transparent;
    transition: all 0.3s ease;
}
.mobile-link:hover {
    color: #22d3ee;
    border-left-color: #22d3ee;
}
.mobile-divider {
    border: none;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    margin: 0.5rem 0;
}
.mobile-cta {
    background: #2563eb;
    color: #fff;
    border: none;
    padding: 0.75rem 1rem;
    border-radius: 0.75rem;
    font-weight: 700;
}

/* Hero */
.hero {
    position: relative;
    min-height: 90vh;
    display: flex;
    align-items: center;
    padding: 8rem 0 5rem;
    overflow: hidden;
    background: #020617;
}
.hero-backdrop {
    position: absolute;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
}
.grid-floor {
    position: absolute;
    bottom: 0;
    left: -50%;
    right: -50%;
    height: 500px;
    opacity: 0.2;
    background: linear-gradient(transparent 0%, #0ea5e9 100%);
    mask-image: linear-gradient(to bottom, transparent, black);
    -webkit-mask-image: linear-gradient(to bottom, transparent, black);
    transform: perspective(500px) rotateX(60deg) translateY(100px) translateZ(-200px);
}
.grid-lines {
    position: absolute;
    inset: 0;
    background-image:
        linear-gradient(rgba(14, 165, 233, 0.5) 1px, transparent 1px),
        linear-gradient(90deg, rgba(14, 165, 233, 0.5) 1px, transparent 1px);
    background-size: 60px 60px;
}
.spotlight {
    position: absolute;
    top: 0;
    left: 50%;
    transform: translateX(-50%);
    width: 800px;
    height: 500px;
    background: rgba(37, 99, 235, 0.1);
    border-radius: 100%;
    filter: blur(120px);
    mix-blend-mode: screen;
}
.hero-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    position: relative;
    z-index: 10;
    display: flex;
    align-items: center;
    gap: 5rem;
}
.hero-copy {
    width: 50%;
}
.hero-badge {
    display: inline-flex;
    align-items: center;
    padding: 0.375rem 1rem;
    border-radius: 9999px;
    background: rgba(15, 23, 42, 0.8);
    border: 1px solid rgba(59, 130, 246, 0.3);
    backdrop-filter: blur(12px);
    margin-bottom: 2rem;
    box-shadow: 0 0 20px rgba(59, 130, 246, 0.15);
    cursor: default;
}
.badge-dot {
    position: relative;
    display: inline-flex;
    width: 0.5rem;
    height: 0.5rem;
    margin-right: 0.75rem;
    border-radius: 9999px;
    background: #22c55e;
}
.badge-ping {
    position: absolute;
    inset: 0;
    border-radius: 9999px;
    background: #4ade80;
    opacity: 0.75;
    animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
}
.badge-text {
    font-size: 0.875rem;
    color: #cbd5e1;
    font-weight: 500;
    letter-spacing: 0.02em;
}
.badge-new {
    color: #60a5fa;
    font-weight: 700;
}
.hero-title {
    font-size: 5.5rem;
    font-weight: 900;
    letter-spacing: -0.04em;
    line-height: 1.05;
    color: #fff;
    margin-bottom: 2rem;
}
.hero-glow-text {
    background: linear-gradient(to right, #ffffff 20%, #38bdf8 40%, #ffffff 60%, #ffffff 80%);
    background-size: 200% auto;
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
    animation: shine 5s linear infinite;
}
.hero-subtitle {
    max-width: 36rem;
    font-size: 1.25rem;
    color: #94a3b8;
    line-height: 1.7;
    margin-bottom: 3rem;
}
.subtitle-strong {
    color: #fff;
    font-weight: 600;
}
.hero-cta-row {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}
.hero-cta-primary {
    padding: 1.25rem 2.5rem;
    background: #fff;
    color: #000;
    border: none;
    border-radius: 9999px;
    font-weight: 700;
    font-size: 1.125rem;
    box-shadow: 0 0 40px rgba(255, 255, 255, 0.3);
    transition: all 0.3s ease;
}
.hero-cta-primary:hover {
    background: #ecfeff;
    box-shadow: 0 0 60px rgba(255, 255, 255, 0.5);
    transform: scale(1.05);
}
.cta-arrow {
    margin-left: 0.5rem;
}
.hero-cta-ghost {
    padding: 1.25rem 2.5rem;
    background: rgba(255, 255, 255, 0.05);
    color: #fff;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 9999px;
    font-weight: 700;
    font-size: 1.125rem;
    backdrop-filter: blur(4px);
    transition: background 0.3s ease;
}
.hero-cta-ghost:hover {
    background: rgba(255, 255, 255, 0.1);
}
.play-glyph {
    margin-right: 0.75rem;
    font-size: 0.9rem;
}
.hero-trust-row {
    margin-top: 4rem;
    display: flex;
    align-items: center;
    gap: 1.5rem;
    color: #64748b;
    font-size: 0.875rem;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    padding-top: 2rem;
}
.trust-item {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.trust-check {
    color: #22c55e;
}

/* Hero visual rig */
.hero-visual {
    width: 50%;
    height: 700px;
    display: flex;
    align-items: center;
    justify-content: center;
    perspective: 1000px;
}
.rig {
    position: relative;
    width: 100%;
    max-width: 36rem;
    aspect-ratio: 1;
    transition: transform 0.1s ease-out;
    transform-style: preserve-3d;
}
.rig-glow {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 120%;
    height: 120%;
    transform: translate(-50%, -50%);
    background: rgba(59, 130, 246, 0.2);
    border-radius: 9999px;
    filter: blur(100px);
}
.terminal {
    position: relative;
    z-index: 20;
    background: rgba(11, 17, 32, 0.9);
    backdrop-filter: blur(20px);
    border: 1px solid rgba(59, 130, 246, 0.3);
    border-radius: 1rem;
    overflow: hidden;
    box-shadow: 0 0 80px rgba(59, 130, 246, 0.3);
}
.terminal-bar {
    height: 2.5rem;
    background: #020617;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 1rem;
}
.terminal-dots {
    display: flex;
    gap: 0.5rem;
}
.dot {
    width: 0.75rem;
    height: 0.75rem;
    border-radius: 9999px;
}
.dot-red { background: rgba(239, 68, 68, 0.8); }
.dot-yellow { background: rgba(234, 179, 8, 0.8); }
.dot-green { background: rgba(34, 197, 94, 0.8); }
.dot-grey { background: #475569; }
.terminal-secure {
    font-size: 0.7rem;
    color: #64748b;
    font-family: 'JetBrains Mono', 'Fira Code', monospace;
}
.terminal-body {
    position: relative;
    padding: 1.5rem;
    height: 320px;
    font-family: 'JetBrains Mono', 'Fira Code', monospace;
    font-size: 0.875rem;
    color: #dbeafe;
    overflow: hidden;
}
.prompt-line {
    display: flex;
    gap: 0.5rem;
    padding-top: 0.25rem;
}
.prompt-arrow { color: #4ade80; }
.prompt-path { color: #93c5fd; }
.prompt-cmd { color: #94a3b8; }
.boot-log {
    margin: 0.5rem 0;
    padding: 0.5rem 0 0.5rem 1rem;
    border-left: 1px solid rgba(255, 255, 255, 0.1);
    font-size: 0.75rem;
    color: #94a3b8;
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
}
.log-ok { color: #4ade80; }
.stats-panel {
    margin-top: 1rem;
    background: rgba(2, 6, 23, 0.8);
    border: 1px solid rgba(59, 130, 246, 0.2);
    border-radius: 0.5rem;
    padding: 1rem;
    position: relative;
    overflow: hidden;
}
.stats-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}
.stat-label {
    font-size: 0.625rem;
    color: #64748b;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    margin-bottom: 0.25rem;
}
.stat-value {
    font-size: 1.5rem;
    font-weight: 700;
    color: #fff;
    margin-bottom: 0.25rem;
}
.stat-unit {
    font-size: 0.875rem;
    color: #64748b;
}
.stat-meter {
    height: 0.25rem;
    background: #1e293b;
    border-radius: 9999px;
    overflow: hidden;
}
.meter-fill {
    height: 100%;
    border-radius: 9999px;
}
.meter-gpu {
    width: 98%;
    background: linear-gradient(to right, #3b82f6, #22d3ee);
    box-shadow: 0 0 10px rgba(56, 189, 248, 0.8);
}
.meter-mem {
    width: 75%;
    background: #a855f7;
    box-shadow: 0 0 10px rgba(168, 85, 247, 0.8);
}
.stats-footer {
    margin-top: 1rem;
    padding-top: 0.75rem;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    display: flex;
    justify-content: space-between;
    font-size: 0.75rem;
    color: #94a3b8;
}
.stat-good {
    color: #4ade80;
    font-weight: 700;
}
.scanline {
    position: absolute;
    inset: 0;
    height: 1rem;
    background: linear-gradient(to bottom, transparent, rgba(59, 130, 246, 0.05), transparent);
    animation: scanline 3s linear infinite;
    pointer-events: none;
}
.float-chip {
    position: absolute;
    background: rgba(15, 23, 42, 0.9);
    backdrop-filter: blur(8px);
    border: 1px solid #334155;
    padding: 0.75rem;
    border-radius: 0.75rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.4);
    font-size: 1.5rem;
}
.chip-server {
    right: -3rem;
    top: 5rem;
}
.chip-cpu {
    left: -2rem;
    bottom: 8rem;
}

/* Marquee */
.marquee-section {
    padding: 3rem 0;
    background: rgba(2, 6, 23, 0.5);
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    overflow: hidden;
}
.marquee-heading {
    text-align: center;
    color: #64748b;
    font-size: 0.875rem;
    font-weight: 600;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    margin-bottom: 2rem;
}
.marquee-viewport {
    position: relative;
    width: 100%;
}
.marquee-track {
    display: flex;
    white-space: nowrap;
    width: max-content;
}
.marquee-item {
    margin: 0 2rem;
    display: flex;
    align-items: center;
    font-size: 1.5rem;
    font-weight: 700;
    color: #334155;
    transition: color 0.3s ease;
    cursor: default;
}
.marquee-item:hover {
    color: #06b6d4;
}
.marquee-dot {
    width: 0.375rem;
    height: 0.375rem;
    border-radius: 9999px;
    background: #1e293b;
    margin-left: 2rem;
}
.marquee-fade {
    position: absolute;
    top: 0;
    bottom: 0;
    width: 8rem;
    z-index: 10;
    pointer-events: none;
}
.marquee-fade-left {
    left: 0;
    background: linear-gradient(to right, #020617, transparent);
}
.marquee-fade-right {
    right: 0;
    background: linear-gradient(to left, #020617, transparent);
}

/* Section headings */
.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}
.section-heading h2 {
    font-size: 3rem;
    font-weight: 700;
    color: #fff;
    margin-bottom: 1.5rem;
}
.section-heading p {
    color: #94a3b8;
    max-width: 42rem;
    margin: 0 auto;
    font-size: 1.125rem;
}
.heading-footnote {
    font-size: 0.875rem;
    margin-top: 0.5rem;
    color: #64748b;
}

/* Steps */
.steps-section {
    padding: 6rem 1.5rem;
    position: relative;
    overflow: hidden;
    max-width: 80rem;
    margin: 0 auto;
}
.steps-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    position: relative;
}
.steps-line {
    position: absolute;
    top: 3rem;
    left: 0;
    width: 100%;
    height: 2px;
    background: linear-gradient(to right, transparent, #1e3a8a, transparent);
    z-index: 0;
}
.step-cell {
    position: relative;
    z-index: 10;
    height: 100%;
}
.step-card {
    background: #0b1120;
    border: 1px solid rgba(255, 255, 255, 0.1);
    padding: 2rem;
    border-radius: 1.5rem;
    height: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
    position: relative;
    transition: border-color 0.3s ease;
}
.step-card:hover {
    border-color: rgba(59, 130, 246, 0.5);
}
.step-icon {
    position: absolute;
    top: 0;
    left: 50%;
    transform: translate(-50%, -50%);
    background: #0f172a;
    border: 1px solid rgba(255, 255, 255, 0.1);
    width: 4rem;
    height: 4rem;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.4);
    transition: transform 0.3s ease;
}
.step-card:hover .step-icon {
    transform: translate(-50%, -50%) scale(1.1);
}
.step-head {
    position: relative;
    margin: 2rem 0 1rem;
}
.step-number {
    position: absolute;
    top: -1.25rem;
    left: 50%;
    transform: translateX(-50%);
    font-size: 3rem;
    font-weight: 900;
    color: #1e293b;
    opacity: 0.5;
    user-select: none;
    z-index: 0;
}
.step-title {
    position: relative;
    z-index: 10;
    font-size: 1.25rem;
    font-weight: 700;
    color: #fff;
}
.step-desc {
    color: #94a3b8;
    font-size: 0.875rem;
    line-height: 1.7;
}

/* Features */
.features-section {
    padding: 6rem 1.5rem;
    background: rgba(2, 6, 23, 0.3);
}
.features-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}
.feature-cell {
    height: 100%;
}
.feature-card {
    padding: 2rem;
    border-radius: 1.5rem;
    height: 100%;
    transition: all 0.3s ease;
}
.feature-card:hover {
    transform: translateY(-0.5rem);
}
.feature-icon {
    width: 4rem;
    height: 4rem;
    margin-bottom: 1.5rem;
    background: linear-gradient(to bottom right, #1e293b, #0f172a);
    border-radius: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.75rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
    border: 1px solid rgba(255, 255, 255, 0.1);
    transition: transform 0.3s ease;
}
.feature-card:hover .feature-icon {
    transform: scale(1.1);
    border-color: rgba(6, 182, 212, 0.5);
}
.accent-cyan { color: #22d3ee; }
.accent-yellow { color: #facc15; }
.accent-blue { color: #60a5fa; }
.accent-green { color: #4ade80; }
.accent-purple { color: #c084fc; }
.accent-pink { color: #f472b6; }
.feature-title {
    font-size: 1.25rem;
    font-weight: 700;
    color: #fff;
    margin-bottom: 0.75rem;
    transition: color 0.3s ease;
}
.feature-card:hover .feature-title {
    color: #22d3ee;
}
.feature-desc {
    color: #94a3b8;
    line-height: 1.7;
    font-size: 0.875rem;
}

/* Use cases */
.usecases-section {
    position: relative;
    padding: 8rem 1.5rem;
    overflow: hidden;
    background: #020617;
}
.usecase-glows {
    position: absolute;
    inset: 0;
    pointer-events: none;
}
.usecase-glow {
    position: absolute;
    width: 600px;
    height: 600px;
    border-radius: 9999px;
    filter: blur(120px);
    opacity: 0;
    transform: scale(0.5);
    transition: all 1s ease-in-out;
}
.usecase-glow.active {
    opacity: 1;
    transform: scale(1);
}
.glow-creators {
    top: 25%;
    left: -15%;
    background: rgba(59, 130, 246, 0.1);
}
.glow-engineers {
    bottom: 25%;
    right: -15%;
    background: rgba(168, 85, 247, 0.1);
}
.usecase-heading {
    margin-bottom: 2rem;
}
.gradient-word {
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
    background-image: linear-gradient(to right, #60a5fa, #22d3ee, #34d399);
}
.usecases-section.engineers .gradient-word {
    background-image: linear-gradient(to right, #f472b6, #c084fc, #818cf8);
}
.tab-pill {
    display: inline-flex;
    background: rgba(15, 23, 42, 0.8);
    padding: 0.375rem;
    border-radius: 9999px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(12px);
    position: relative;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
}
.tab-slider {
    position: absolute;
    top: 0.375rem;
    bottom: 0.375rem;
    left: 6px;
    width: calc(50% - 9px);
    border-radius: 9999px;
    background: #2563eb;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
    transition: all 0.5s cubic-bezier(0.4, 0, 0.2, 1);
    z-index: 0;
}
.usecases-section.engineers .tab-slider {
    left: 50%;
    transform: translateX(3px);
    background: #9333ea;
}
.tab-button {
    position: relative;
    z-index: 10;
    min-width: 160px;
    padding: 0.75rem 2rem;
    border: none;
    background: none;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 700;
    color: #94a3b8;
    transition: color 0.3s ease;
}
.tab-button:hover {
    color: #fff;
}
.tab-button.active {
    color: #fff;
}
.usecase-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
    position: relative;
    z-index: 10;
}
.usecase-copy {
    min-height: 400px;
}
.usecase-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1.5rem;
    font-size: 1.25rem;
    background: rgba(59, 130, 246, 0.1);
    border: 1px solid rgba(59, 130, 246, 0.2);
}
.usecases-section.engineers .usecase-icon {
    background: rgba(168, 85, 247, 0.1);
    border-color: rgba(168, 85, 247, 0.2);
}
.usecase-copy h3 {
    font-size: 1.875rem;
    font-weight: 700;
    color: #fff;
    margin-bottom: 1rem;
}
.usecase-copy p {
    color: #94a3b8;
    margin-bottom: 2rem;
    font-size: 1.125rem;
    line-height: 1.7;
}
.check-list {
    list-style: none;
    margin-bottom: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.check-item {
    display: flex;
    align-items: center;
    color: #cbd5e1;
}
.check-bullet {
    background: rgba(255, 255, 255, 0.05);
    border-radius: 9999px;
    padding: 0.25rem 0.4rem;
    margin-right: 0.75rem;
    font-size: 0.75rem;
    color: #60a5fa;
}
.usecases-section.engineers .check-bullet {
    color: #c084fc;
}
.usecase-link {
    background: none;
    border: none;
    font-weight: 700;
    font-size: 1rem;
    color: #60a5fa;
    transition: color 0.3s ease;
}
.usecase-link:hover {
    color: #93c5fd;
}
.usecases-section.engineers .usecase-link {
    color: #c084fc;
}
.usecases-section.engineers .usecase-link:hover {
    color: #d8b4fe;
}
.usecase-visual {
    position: relative;
    perspective: 1000px;
}
.viewport-glow {
    position: absolute;
    inset: -0.25rem;
    border-radius: 1rem;
    filter: blur(16px);
    opacity: 0.4;
    background: #2563eb;
    transition: background 0.5s ease;
}
.usecases-section.engineers .viewport-glow {
    background: #9333ea;
}
.browser-frame {
    position: relative;
    border-radius: 1rem;
    overflow: hidden;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    transition: transform 0.5s ease;
}
.browser-frame:hover {
    transform: scale(1.02) rotate(-1deg);
}
.browser-bar {
    background: #0f172a;
    padding: 0.75rem 1.25rem;
    border-bottom: 1px solid #1e293b;
    display: flex;
    align-items: center;
    gap: 1rem;
}
.browser-address {
    background: #1e293b;
    padding: 0.375rem 1rem;
    border-radius: 0.5rem;
    font-size: 0.75rem;
    color: #94a3b8;
    flex: 1;
    text-align: center;
    font-family: 'JetBrains Mono', 'Fira Code', monospace;
}
.viewport {
    aspect-ratio: 16 / 10;
    background: #000;
    position: relative;
}
.render-view {
    background: #0f172a;
    overflow: hidden;
}
.viewport-grid {
    position: absolute;
    inset: 0;
    background-image:
        linear-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px),
        linear-gradient(90deg, rgba(255, 255, 255, 0.03) 1px, transparent 1px);
    background-size: 40px 40px;
}
.render-art {
    position: absolute;
    inset: 0;
    background:
        radial-gradient(circle at 30% 40%, rgba(56, 189, 248, 0.4), transparent 50%),
        radial-gradient(circle at 70% 60%, rgba(168, 85, 247, 0.3), transparent 55%),
        radial-gradient(circle at 50% 80%, rgba(52, 211, 153, 0.2), transparent 45%);
    mix-blend-mode: screen;
    opacity: 0.8;
}
.viewport-hud {
    position: absolute;
    top: 1rem;
    left: 1rem;
    right: 1rem;
    display: flex;
    justify-content: space-between;
    font-size: 0.625rem;
    font-family: 'JetBrains Mono', 'Fira Code', monospace;
    color: #94a3b8;
}
.hud-right {
    text-align: right;
}
.render-progress {
    position: absolute;
    bottom: 1.5rem;
    left: 1.5rem;
    right: 1.5rem;
}
.progress-labels {
    display: flex;
    justify-content: space-between;
    font-size: 0.75rem;
    color: #60a5fa;
    margin-bottom: 0.5rem;
    font-family: 'JetBrains Mono', 'Fira Code', monospace;
}
.progress-track {
    height: 0.375rem;
    background: #1e293b;
    border-radius: 9999px;
    overflow: hidden;
}
.progress-fill {
    height: 100%;
    background: linear-gradient(to right, #3b82f6, #22d3ee);
    animation: typing 4s infinite;
}
.terminal-view {
    background: #0d1117;
    padding: 1.5rem;
    font-family: 'JetBrains Mono', 'Fira Code', monospace;
    font-size: 0.8rem;
    overflow: hidden;
    color: #cbd5e1;
}
.term-title {
    display: flex;
    align-items: center;
    color: #94a3b8;
    margin-bottom: 1rem;
    border-bottom: 1px solid #1e293b;
    padding-bottom: 0.5rem;
}
.term-line {
    color: #cbd5e1;
    padding-top: 0.125rem;
}
.term-user { color: #c084fc; }
.term-host { color: #818cf8; }
.term-dim {
    color: #64748b;
    padding-top: 0.25rem;
}
.term-indent {
    color: #cbd5e1;
    padding-left: 1rem;
}
.train-panel {
    margin-top: 1rem;
    background: rgba(30, 41, 59, 0.5);
    padding: 0.75rem;
    border-radius: 0.375rem;
    border: 1px solid #334155;
}
.train-labels {
    display: flex;
    justify-content: space-between;
    font-size: 0.75rem;
    color: #94a3b8;
    margin-bottom: 0.25rem;
}
.train-fill {
    width: 65%;
    background: #a855f7;
    animation: none;
}
.term-cursor {
    color: #c084fc;
    margin-top: 0.5rem;
    animation: blink 1s step-end infinite;
}

/* Benchmarks */
.benchmarks-section {
    padding: 6rem 1.5rem;
    position: relative;
}
.benchmark-panel {
    max-width: 56rem;
    margin: 0 auto;
    padding: 3rem;
    border-radius: 1.5rem;
    position: relative;
    overflow: hidden;
}
.benchmark-watermark {
    position: absolute;
    top: 0;
    right: 0;
    padding: 2rem;
    font-size: 8rem;
    opacity: 0.05;
    pointer-events: none;
}
.benchmark-row {
    position: relative;
    z-index: 10;
    margin-bottom: 2rem;
}
.benchmark-row:last-child {
    margin-bottom: 0;
}
.benchmark-head {
    display: flex;
    align-items: center;
    margin-bottom: 0.5rem;
}
.benchmark-icon {
    padding: 0.375rem;
    border-radius: 0.5rem;
    margin-right: 0.75rem;
    background: #1e293b;
    color: #64748b;
    font-size: 0.875rem;
}
.benchmark-icon.highlight {
    background: rgba(59, 130, 246, 0.2);
    color: #60a5fa;
}
.benchmark-label {
    font-size: 0.875rem;
    font-weight: 500;
    color: #94a3b8;
}
.benchmark-label.highlight {
    color: #fff;
}
.benchmark-value {
    margin-left: auto;
    font-size: 0.875rem;
    font-family: 'JetBrains Mono', 'Fira Code', monospace;
    color: #64748b;
}
.benchmark-track {
    height: 1rem;
    background: rgba(30, 41, 59, 0.5);
    border-radius: 9999px;
    overflow: hidden;
}
.benchmark-fill {
    height: 100%;
    border-radius: 9999px;
    position: relative;
}
.fill-product {
    background: linear-gradient(to right, #3b82f6, #22d3ee);
}
.fill-rival {
    background: #334155;
}
.fill-pulse {
    position: absolute;
    inset: 0;
    background: rgba(255, 255, 255, 0.3);
    animation: pulse-glow 2s ease-in-out infinite;
    transform-origin: center;
}

/* Testimonials */
.testimonials-section {
    padding: 6rem 1.5rem;
    background: linear-gradient(to bottom, #020617, #020617 30%, rgba(2, 6, 23, 0.95));
    border-top: 1px solid rgba(255, 255, 255, 0.05);
}
.testimonials-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}
.testimonial-cell {
    height: 100%;
}
.testimonial-card {
    padding: 2rem;
    border-radius: 1rem;
    height: 100%;
    position: relative;
    display: flex;
    flex-direction: column;
}
.quote-mark {
    position: absolute;
    top: -1rem;
    left: 2rem;
    font-size: 3.75rem;
    color: rgba(59, 130, 246, 0.2);
    font-family: Georgia, serif;
}
.quote-text {
    color: #cbd5e1;
    margin-bottom: 1.5rem;
    position: relative;
    z-index: 10;
    font-style: italic;
    line-height: 1.7;
}
.quote-meta {
    display: flex;
    align-items: center;
    margin-top: auto;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    padding-top: 1rem;
}
.avatar {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 9999px;
    background: linear-gradient(to top right, #3b82f6, #a855f7);
    display: flex;
    align-items: center;
    justify-content: center;
    color: #fff;
    font-weight: 700;
    font-size: 0.875rem;
    margin-right: 0.75rem;
}
.quote-name {
    color: #fff;
    font-weight: 700;
    font-size: 0.875rem;
}
.quote-role {
    color: #60a5fa;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    font-weight: 600;
}
.stars {
    margin-left: auto;
    color: #eab308;
    font-size: 0.875rem;
    letter-spacing: 0.1em;
}

/* Tech specs */
.specs-section {
    padding: 6rem 1.5rem;
    position: relative;
    background: #020617;
    overflow: hidden;
}
.beam {
    position: absolute;
    left: 0;
    width: 100%;
    height: 1px;
}
.beam-top {
    top: 25%;
    background: linear-gradient(to right, transparent, rgba(6, 182, 212, 0.2), transparent);
}
.beam-bottom {
    bottom: 25%;
    background: linear-gradient(to right, transparent, rgba(168, 85, 247, 0.2), transparent);
}
.specs-kicker {
    display: block;
    color: #22d3ee;
    font-family: 'JetBrains Mono', 'Fira Code', monospace;
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    margin-bottom: 0.5rem;
}
.specs-grid {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    position: relative;
    z-index: 10;
}
.spec-cell {
    height: 100%;
}
.spec-card {
    padding: 0.25rem;
    border-radius: 1.5rem;
    height: 100%;
}
.spec-card-inner {
    background: #0b1120;
    border-radius: 1.375rem;
    padding: 2rem;
    height: 100%;
    position: relative;
    overflow: hidden;
    transition: transform 0.5s ease;
}
.spec-card:hover .spec-card-inner {
    transform: translateY(-5px);
}
.spec-watermark {
    position: absolute;
    top: 0;
    right: 0;
    padding: 1.5rem;
    font-size: 6rem;
    opacity: 0.1;
    transition: opacity 0.3s ease;
    pointer-events: none;
}
.spec-card:hover .spec-watermark {
    opacity: 0.2;
}
.spec-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1.5rem;
    font-size: 1.25rem;
}
.icon-green { background: rgba(34, 197, 94, 0.2); }
.icon-cyan { background: rgba(6, 182, 212, 0.2); }
.icon-purple { background: rgba(168, 85, 247, 0.2); }
.spec-title {
    font-size: 1.5rem;
    font-weight: 700;
    color: #fff;
    margin-bottom: 0.5rem;
}
.spec-figure {
    font-size: 2.25rem;
    font-weight: 800;
    margin-bottom: 1rem;
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}
.figure-green { background-image: linear-gradient(to right, #4ade80, #059669); }
.figure-cyan { background-image: linear-gradient(to right, #22d3ee, #2563eb); }
.figure-purple { background-image: linear-gradient(to right, #c084fc, #db2777); }
.spec-desc {
    color: #94a3b8;
    font-size: 0.875rem;
    margin-bottom: 1.5rem;
    line-height: 1.6;
}
.meter-labels {
    display: flex;
    justify-content: space-between;
    font-size: 0.75rem;
    color: #64748b;
    font-family: 'JetBrains Mono', 'Fira Code', monospace;
    margin-bottom: 0.5rem;
}
.meter-labels.faded,
.spec-track.faded {
    opacity: 0.5;
}
.label-green { color: #4ade80; }
.spec-track {
    height: 0.5rem;
    background: #1e293b;
    border-radius: 9999px;
    overflow: hidden;
    margin-bottom: 0.75rem;
}
.spec-fill {
    height: 100%;
    border-radius: 9999px;
}
.fill-green {
    width: 100%;
    background: #22c55e;
}
.fill-grey {
    width: 10%;
    background: #64748b;
}
.spec-stats {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
    margin-top: 2rem;
}
.spec-stat {
    background: rgba(15, 23, 42, 0.5);
    padding: 0.75rem;
    border-radius: 0.5rem;
    text-align: center;
    border: 1px solid rgba(255, 255, 255, 0.05);
}
.spec-stat-label {
    font-size: 0.75rem;
    color: #64748b;
    text-transform: uppercase;
}
.spec-stat-value {
    font-size: 1.25rem;
    font-weight: 700;
    color: #fff;
}
.spec-shell {
    margin-top: 1rem;
    padding: 1rem;
    background: rgba(15, 23, 42, 0.8);
    border-radius: 0.5rem;
    border: 1px solid rgba(168, 85, 247, 0.2);
    font-family: 'JetBrains Mono', 'Fira Code', monospace;
    font-size: 0.75rem;
    color: #4ade80;
}
.shell-result {
    color: #cbd5e1;
    margin-top: 0.25rem;
}

/* FAQ */
.faq-section {
    padding: 6rem 1.5rem;
    max-width: 56rem;
    margin: 0 auto;
}
.faq-list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.faq-item {
    border-radius: 0.75rem;
    overflow: hidden;
}
.faq-question {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1.5rem;
    background: none;
    border: none;
    text-align: left;
}
.faq-q-text {
    font-size: 1.125rem;
    font-weight: 500;
    color: #e2e8f0;
}
.faq-chevron {
    color: #64748b;
    font-size: 1.25rem;
    transition: color 0.3s ease;
}
.faq-item.open .faq-chevron {
    color: #60a5fa;
}
.faq-answer {
    max-height: 0;
    opacity: 0;
    overflow: hidden;
    padding: 0 1.5rem;
    color: #94a3b8;
    line-height: 1.7;
    transition: all 0.3s ease-in-out;
}
.faq-item.open .faq-answer {
    max-height: 10rem;
    opacity: 1;
    padding-bottom: 1.5rem;
}

/* CTA */
.cta-section {
    padding: 8rem 1.5rem;
    position: relative;
    overflow: hidden;
}
.cta-backdrop {
    position: absolute;
    inset: 0;
    background: linear-gradient(to right, rgba(30, 58, 138, 0.4), rgba(22, 78, 99, 0.4));
    z-index: 0;
}
.cta-inner {
    max-width: 64rem;
    margin: 0 auto;
    text-align: center;
    position: relative;
    z-index: 10;
}
.cta-title {
    font-size: 3.5rem;
    font-weight: 700;
    color: #fff;
    letter-spacing: -0.02em;
    margin-bottom: 2rem;
}
.cta-sub {
    color: #cffafe;
    font-size: 1.25rem;
    margin-bottom: 3rem;
    max-width: 42rem;
    margin-left: auto;
    margin-right: auto;
}
.credit-chip {
    font-weight: 700;
    color: #fff;
    background: rgba(59, 130, 246, 0.2);
    padding: 0 0.5rem;
    border-radius: 0.25rem;
}
.cta-buttons {
    display: flex;
    justify-content: center;
    gap: 1.5rem;
}
.cta-primary {
    background: #fff;
    color: #020617;
    padding: 1.25rem 2.5rem;
    border: none;
    border-radius: 9999px;
    font-weight: 700;
    font-size: 1.125rem;
    box-shadow: 0 0 30px rgba(255, 255, 255, 0.3);
    transition: transform 0.3s ease;
}
.cta-primary:hover {
    transform: scale(1.05);
    background: #ecfeff;
}
.cta-ghost {
    padding: 1.25rem 2.5rem;
    border-radius: 9999px;
    font-weight: 700;
    font-size: 1.125rem;
    color: #fff;
    background: none;
    border: 1px solid rgba(255, 255, 255, 0.2);
    backdrop-filter: blur(4px);
    transition: background 0.3s ease;
}
.cta-ghost:hover {
    background: rgba(255, 255, 255, 0.1);
}
.cta-note {
    margin-top: 2rem;
    font-size: 0.875rem;
    color: rgba(165, 243, 252, 0.6);
}

/* Footer */
.footer {
    background: #020617;
    padding: 5rem 1.5rem 2.5rem;
    border-top: 1px solid #1e293b;
}
.footer-grid {
    max-width: 80rem;
    margin: 0 auto 4rem;
    display: grid;
    grid-template-columns: 2fr 1fr 1fr 1fr;
    gap: 3rem;
}
.footer-logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
}
.footer-blurb {
    color: #64748b;
    font-size: 0.875rem;
    line-height: 1.7;
    margin-bottom: 1.5rem;
    max-width: 20rem;
}
.social-row {
    display: flex;
    gap: 1rem;
}
.social-dot {
    width: 2rem;
    height: 2rem;
    background: #1e293b;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    color: rgba(255, 255, 255, 0.5);
    font-size: 0.75rem;
    cursor: pointer;
    transition: all 0.3s ease;
}
.social-dot:hover {
    background: #06b6d4;
    color: #fff;
}
.footer-col h4 {
    color: #fff;
    font-weight: 700;
    margin-bottom: 1.5rem;
}
.footer-col ul {
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.footer-col a {
    color: #94a3b8;
    font-size: 0.875rem;
    text-decoration: none;
    transition: color 0.3s ease;
}
.footer-col a:hover {
    color: #22d3ee;
}
.footer-legal {
    max-width: 80rem;
    margin: 0 auto;
    border-top: 1px solid #0f172a;
    padding-top: 2rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.footer-legal p {
    color: #475569;
    font-size: 0.875rem;
}
.legal-links {
    display: flex;
    gap: 1.5rem;
}
.legal-links a {
    color: #64748b;
    font-size: 0.875rem;
    text-decoration: none;
    transition: color 0.3s ease;
}
.legal-links a:hover {
    color: #fff;
}

/* Responsive */
@media (max-width: 1024px) {
    .hero-inner {
        flex-direction: column;
        gap: 3rem;
    }
    .hero-copy,
    .hero-visual {
        width: 100%;
        text-align: center;
    }
    .hero-visual {
        height: auto;
        padding: 2rem 0;
    }
    .hero-cta-row,
    .hero-trust-row {
        justify-content: center;
    }
    .hero-title {
        font-size: 4rem;
    }
    .usecase-grid {
        grid-template-columns: 1fr;
    }
    .usecase-copy {
        min-height: 0;
    }
    .features-grid,
    .specs-grid,
    .testimonials-grid {
        grid-template-columns: 1fr 1fr;
    }
}

@media (max-width: 768px) {
    .nav-links,
    .nav-actions {
        display: none;
    }
    .burger-menu {
        display: block;
    }
    .mobile-menu {
        display: flex;
    }
    .hero-title {
        font-size: 3rem;
    }
    .section-heading h2 {
        font-size: 2rem;
    }
    .steps-grid,
    .features-grid,
    .specs-grid,
    .testimonials-grid {
        grid-template-columns: 1fr;
    }
    .steps-line {
        display: none;
    }
    .step-card {
        margin-top: 2rem;
    }
    .hero-cta-row,
    .cta-buttons {
        flex-direction: column;
        align-items: center;
        gap: 1rem;
    }
    .float-chip {
        display: none;
    }
    .terminal-body {
        height: auto;
    }
    .footer-grid {
        grid-template-columns: 1fr 1fr;
    }
    .footer-legal {
        flex-direction: column;
        gap: 1rem;
    }
    .cta-title {
        font-size: 2.25rem;
    }
    .tab-button {
        min-width: 120px;
        padding: 0.75rem 1rem;
    }
}
"#;
