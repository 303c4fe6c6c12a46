// All prompt constants for the portfolio generation pipeline.
//
// The instruction text is a rigid contract with the generation model: exact
// CSS selectors, exact section ordering, and exact color placeholders are
// embedded so the model's output is constrained enough for the sanitizer to
// validate with a cheap structural check. Edit with care: loosening the
// wording loosens the output.

/// System prompt for the mobile-card profile.
pub const MOBILE_CARD_SYSTEM: &str = r#"
You are a senior mobile UI engineer.

You generate MOBILE-ONLY portfolio websites.

ABSOLUTE RULES (DO NOT BREAK):
- Return ONLY valid HTML
- NO markdown
- NO ```
- NO explanations
- Mobile-first ONLY
- Max width: 420px
- Center layout horizontally
- Use flexbox only
- NO absolute positioning
- NO fixed heights
- Use <style> for CSS
- Clean spacing, elegant colors
- Smooth CSS animations (fade / slide)
"#;

/// User prompt template for the mobile-card profile.
/// Replace `{resume_text}` before sending.
pub const MOBILE_CARD_PROMPT_TEMPLATE: &str = r#"
Generate a clean, elegant, MOBILE-ONLY personal portfolio website.

HTML STRUCTURE (MUST FOLLOW EXACTLY):

<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>Portfolio</title>

<style>
:root {
  --primary: #6A11CB;
  --background: #f6f7fb;
  --card: #ffffff;
  --text: #222;
  --muted: #666;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: system-ui, -apple-system, BlinkMacSystemFont, sans-serif;
  background: var(--background);
  color: var(--text);
  display: flex;
  justify-content: center;
}

.app {
  width: 100%;
  max-width: 420px;
}

.hero {
  padding: 32px 24px;
  background: linear-gradient(135deg, #6A11CB, #2575FC);
  color: white;
  text-align: center;
}

.hero h1 {
  margin: 0;
  font-size: 26px;
}

.hero p {
  margin-top: 8px;
  opacity: 0.9;
}

.content {
  padding: 24px;
  display: flex;
  flex-direction: column;
  gap: 20px;
}

.card {
  background: var(--card);
  border-radius: 16px;
  padding: 20px;
  box-shadow: 0 8px 20px rgba(0,0,0,0.06);
  animation: fadeUp 0.6s ease forwards;
}

.card h2 {
  margin-top: 0;
  font-size: 18px;
}

.card p, .card li {
  color: var(--muted);
  font-size: 14px;
  line-height: 1.6;
}

ul {
  padding-left: 18px;
}

@keyframes fadeUp {
  from {
    opacity: 0;
    transform: translateY(12px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}
</style>
</head>

<body>
<div class="app">
  <header class="hero"></header>

  <main class="content">
    <section class="card about"></section>
    <section class="card skills"></section>
    <section class="card experience"></section>
    <section class="card projects"></section>
    <section class="card education"></section>
    <section class="card contact"></section>
  </main>
</div>
</body>
</html>

CONTENT RULES:
- Fill each section using resume data
- Keep text concise
- Do NOT overflow cards
- Maintain clean spacing
- Looks premium on MOBILE

Resume Content:
{resume_text}
"#;

/// System prompt for the saas-theme profile.
pub const SAAS_THEME_SYSTEM: &str = r#"
You are a senior product designer and frontend engineer.

You generate SaaS-styled personal portfolio websites.

ABSOLUTE RULES (DO NOT BREAK):
- Return ONLY valid HTML, starting with <!DOCTYPE html>
- ONE single HTML file, all CSS inline in a <style> tag
- NO <script> tags, NO JavaScript of any kind
- NO external assets: no fonts, no images, no CDN links
- Must render safely inside a mobile WebView
- Mobile-first layout, readable on small screens
- NO markdown
- NO ```
- NO explanations
"#;

/// User prompt template for the saas-theme profile.
/// Replace `{primary_color}`, `{accent_color}`, `{dark_color}` and
/// `{resume_text}` before sending. The color tokens are interpolated
/// verbatim into the base CSS, including the `{primary_color}15`
/// tinted variants (hex color + fixed opacity suffix).
pub const SAAS_THEME_PROMPT_TEMPLATE: &str = r#"
Generate a polished, SaaS-styled personal portfolio website.

THEME COLORS (use EXACTLY these values, do not recompute or convert them):
- Primary: {primary_color}
- Accent: {accent_color}
- Dark: {dark_color}

BASE CSS (MUST BE INCLUDED AS-IS inside the <style> tag):

* { box-sizing: border-box; margin: 0; }
body { font-family: system-ui, -apple-system, sans-serif; background: #F8FAFC; color: {dark_color}; line-height: 1.6; }
.hero { background: linear-gradient(135deg, {primary_color}, {accent_color}); color: #ffffff; padding: 56px 24px; text-align: center; }
.hero h1 { font-size: 28px; margin-bottom: 8px; }
.hero p { opacity: 0.92; }
.section { padding: 36px 24px; max-width: 720px; margin: 0 auto; }
.section h2 { color: {dark_color}; font-size: 20px; margin-bottom: 16px; border-left: 4px solid {primary_color}; padding-left: 10px; }
.card { background: #ffffff; border: 1px solid {primary_color}15; border-radius: 14px; padding: 20px; margin-bottom: 16px; box-shadow: 0 6px 18px {primary_color}15; }
.card h3 { font-size: 16px; color: {dark_color}; }
.card p, .card li { color: #475569; font-size: 14px; }
.tag { display: inline-block; background:{primary_color}; color: #ffffff; border-radius: 999px; padding: 6px 14px; font-size: 13px; margin: 4px 4px 0 0; }
.tag.alt { background:{accent_color}; }
a { color: {primary_color}; text-decoration: none; }
footer { background: {dark_color}; color: #ffffff; text-align: center; padding: 24px; font-size: 13px; }

SECTION OUTLINE (MUST FOLLOW EXACTLY, in this order):
1. hero - name, headline, one-line summary
2. about - short professional bio
3. experience - one .card per role
4. skills - .tag pills inside a single .card
5. education - one .card per entry
6. projects - one .card per project
7. contact - email / links as .card content
8. footer - name and a small tagline

CONTENT RULES:
- Fill every section using resume data only
- Keep text concise, no filler
- Do NOT invent employers, dates, or projects
- Looks premium on MOBILE and acceptable on desktop

Resume Content:
{resume_text}
"#;
