//! Starter UI shell: app.vue, the stylesheet entry and nuxt.config.ts

/// Escape text placed in Vue template markup. Braces are encoded so a
/// description cannot open a `{{ }}` interpolation.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text placed inside a single-quoted string in `<script setup>`
pub fn escape_script_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            // keeps `</script>` from closing the block
            '<' => out.push_str("\\x3C"),
            _ => out.push(c),
        }
    }
    out
}

/// Render app.vue: navigation, hero section and a hand-off card, wrapped in
/// `<UApp>` as Nuxt UI requires
pub fn render_starter_shell(name: &str, description: &str) -> String {
    let name_html = escape_markup(name);
    let description_html = escape_markup(description);
    let name_js = escape_script_string(name);
    let description_js = escape_script_string(description);

    format!(
        r#"<template>
  <UApp>
    <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
      <!-- Navigation -->
      <nav class="bg-white dark:bg-gray-800 shadow">
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
          <div class="flex justify-between h-16">
            <div class="flex items-center">
              <h1 class="text-xl font-bold text-gray-900 dark:text-white">
                {name_html}
              </h1>
            </div>
            <div class="flex items-center">
              <UButton variant="outline" size="sm">
                About
              </UButton>
            </div>
          </div>
        </div>
      </nav>

      <!-- Hero Section -->
      <main class="max-w-7xl mx-auto py-16 px-4 sm:px-6 lg:px-8">
        <div class="text-center">
          <h1 class="text-4xl font-bold tracking-tight text-gray-900 dark:text-white sm:text-6xl">
            {name_html}
          </h1>
          <p class="mt-6 text-lg leading-8 text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">
            {description_html}
          </p>
          <div class="mt-10 flex items-center justify-center gap-x-6">
            <UButton size="lg">
              Get Started
            </UButton>
            <UButton variant="outline" size="lg">
              Learn More
            </UButton>
          </div>
        </div>

        <!-- Feature placeholder -->
        <div class="mt-20">
          <div class="bg-white dark:bg-gray-800 shadow rounded-lg p-8">
            <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-4 text-center">
              Ready to Build
            </h2>
            <p class="text-gray-600 dark:text-gray-300 text-center mb-6">
              This is a starter template created by Genesis. Use Claude Code to build the actual functionality:
            </p>
            <div class="bg-gray-100 dark:bg-gray-700 rounded-lg p-4">
              <code class="text-sm text-gray-800 dark:text-gray-200">
                claude "build the functionality described in README.md"
              </code>
            </div>
          </div>
        </div>
      </main>
    </div>
  </UApp>
</template>

<script setup>
// This is a starter template - use Claude Code to build the actual functionality
useHead({{
  title: '{name_js}',
  meta: [
    {{ name: 'description', content: '{description_js}' }}
  ]
}})
</script>"#
    )
}

/// Render assets/css/main.css with the Nuxt UI imports
pub fn render_style_entry() -> String {
    "@import \"tailwindcss\";\n@import \"@nuxt/ui\";".to_string()
}

/// Render nuxt.config.ts registering Nuxt UI and the stylesheet entry
pub fn render_framework_config() -> String {
    r#"// https://nuxt.com/docs/api/configuration/nuxt-config
export default defineNuxtConfig({
  compatibilityDate: '2025-05-15',
  devtools: { enabled: true },
  modules: ['@nuxt/ui'],
  css: ['~/assets/css/main.css']
})"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_contains_plain_text_verbatim() {
        let shell = render_starter_shell("demo", "A todo tracker");
        assert!(shell.contains("                demo\n"));
        assert!(shell.contains("            A todo tracker\n"));
        assert!(shell.contains("title: 'demo',"));
        assert!(shell.contains("content: 'A todo tracker'"));
    }

    #[test]
    fn test_shell_is_deterministic() {
        assert_eq!(
            render_starter_shell("demo", "A todo tracker"),
            render_starter_shell("demo", "A todo tracker")
        );
    }

    #[test]
    fn test_description_cannot_inject_markup() {
        let shell = render_starter_shell("demo", "<script>alert(1)</script> {{ secrets }}");

        let (template, script) = shell.split_once("<script setup>").unwrap();
        assert!(!shell.contains("<script>alert"));
        assert!(!template.contains("{{ secrets }}"));
        assert!(script.contains(r"content: '\x3Cscript>alert(1)\x3C/script> {{ secrets }}'"));
        assert!(shell.contains("&lt;script&gt;alert(1)&lt;/script&gt; &#123;&#123; secrets &#125;&#125;"));
        // exactly one closing script tag: the shell's own
        assert_eq!(shell.matches("</script>").count(), 1);
    }

    #[test]
    fn test_description_cannot_break_script_string() {
        let shell = render_starter_shell("demo", "it's a 'quoted'\nline");
        assert!(shell.contains(r"content: 'it\'s a \'quoted\'\nline'"));
    }

    #[test]
    fn test_escape_script_string_backslash_first() {
        assert_eq!(escape_script_string(r"a\'b"), r"a\\\'b");
    }

    #[test]
    fn test_static_artifacts() {
        assert!(render_style_entry().contains("@import \"@nuxt/ui\";"));
        let config = render_framework_config();
        assert!(config.contains("modules: ['@nuxt/ui']"));
        assert!(config.contains("css: ['~/assets/css/main.css']"));
    }
}
