use dioxus::prelude::*;

/// Palette, glass panels and the float/pulse keyframes used by the shell
pub const SHELL_STYLES: &str = r#"
:root {
  --glass-bg: rgba(212, 116, 30, 0.85);
  --glass-border: rgba(255, 255, 255, 0.15);
  --glass-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
  --gradient-primary: linear-gradient(135deg, #1e293b 0%, #334155 50%, #475569 100%);
  --gradient-secondary: linear-gradient(135deg, #0f172a 0%, #1e293b 100%);
  --text-primary: #1f2937;
  --text-secondary: #374151;
  --text-muted: #6b7280;
  --text-light: #f9fafb;
  --text-amber-dark: #fef3c7;
  --text-amber-light: #fed7aa;
}

.glass-morphism {
  background: var(--glass-bg);
  backdrop-filter: blur(20px);
  -webkit-backdrop-filter: blur(20px);
  border: 1px solid var(--glass-border);
  box-shadow: var(--glass-shadow);
}

.sidebar-glass {
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(20px);
  -webkit-backdrop-filter: blur(20px);
  border: 1px solid rgba(0, 0, 0, 0.1);
}

.gradient-bg {
  background: var(--gradient-primary);
  position: fixed;
  inset: 0;
  z-index: -1;
}

.floating-orb {
  position: absolute;
  border-radius: 50%;
  filter: blur(60px);
  animation: float 8s ease-in-out infinite;
  opacity: 0.3;
}

@keyframes float {
  0%, 100% { transform: translateY(0px) rotate(0deg); }
  50% { transform: translateY(-30px) rotate(180deg); }
}

.ambient-glow {
  position: absolute;
  width: 400px;
  height: 400px;
  background: radial-gradient(circle, rgba(59, 130, 246, 0.15) 0%, transparent 70%);
  border-radius: 50%;
  filter: blur(80px);
  animation: pulse 6s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 0.2; transform: scale(1); }
  50% { opacity: 0.4; transform: scale(1.2); }
}

.text-dark { color: var(--text-primary); }
.text-dark-secondary { color: var(--text-secondary); }
.text-dark-muted { color: var(--text-muted); }
.text-amber-dark { color: var(--text-amber-dark); }
.text-amber-light { color: var(--text-amber-light); }
"#;

struct Orb {
    position: &'static str,
    size: u32,
    gradient: &'static str,
    delay_secs: u32,
}

static ORBS: [Orb; 3] = [
    Orb { position: "top: 15%; left: 10%;", size: 300, gradient: "#3b82f6, #1d4ed8", delay_secs: 0 },
    Orb { position: "top: 50%; right: 10%;", size: 250, gradient: "#6366f1, #4f46e5", delay_secs: 3 },
    Orb { position: "bottom: 25%; left: 20%;", size: 200, gradient: "#8b5cf6, #7c3aed", delay_secs: 6 },
];

static GLOWS: [(&str, u32); 2] = [("top: 20%; right: 25%;", 0), ("bottom: 30%; left: 15%;", 3)];

/// Fixed gradient backdrop with drifting orbs. Purely decorative.
#[component]
pub fn AmbientBackground() -> Element {
    rsx! {
        div {
            class: "gradient-bg",
            "aria-hidden": "true",
            for (index, orb) in ORBS.iter().enumerate() {
                div {
                    key: "orb-{index}",
                    class: "floating-orb",
                    style: "{orb.position} width: {orb.size}px; height: {orb.size}px; background: linear-gradient(45deg, {orb.gradient}); animation-delay: {orb.delay_secs}s;",
                }
            }
            for (index, (position, delay)) in GLOWS.iter().enumerate() {
                div {
                    key: "glow-{index}",
                    class: "ambient-glow",
                    style: "{position} animation-delay: {delay}s;",
                }
            }
        }
    }
}
