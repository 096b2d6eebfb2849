//! Static tables describing the Vite + Vue client stack.

/// Catalog scope holding the pinned versions of this stack.
pub const CATALOG_SCOPE: &str = "vite/vue";

/// Template root of the client files.
pub const SOURCE: &str = "client/vite/vue";
pub const SOURCE_WEBAPP: &str = "client/vite/vue/webapp";
pub const SOURCE_APP: &str = "client/vite/vue/webapp/app";
pub const SOURCE_PRIMARY: &str = "client/vite/vue/webapp/app/common/primary/app";
pub const SOURCE_IMAGES: &str = "client/vite/vue/webapp/content/images";
pub const SOURCE_TEST_PRIMARY: &str = "client/vite/vue/test/spec/common/primary/app";

pub const DESTINATION_WEBAPP: &str = "src/main/webapp";
pub const DESTINATION_APP: &str = "src/main/webapp/app";
pub const DESTINATION_PRIMARY: &str = "src/main/webapp/app/common/primary/app";
pub const DESTINATION_IMAGES: &str = "src/main/webapp/content/images";
pub const DESTINATION_TEST_PRIMARY: &str = "src/test/javascript/spec/common/primary/app";

pub const PACKAGE_JSON: &str = "package.json";

pub const DEPENDENCIES: &[&str] = &["vue"];

pub const DEV_DEPENDENCIES: &[&str] = &[
    "@rushstack/eslint-patch",
    "@types/jest",
    "@typescript-eslint/parser",
    "@vitejs/plugin-vue",
    "@vue/eslint-config-typescript",
    "@vue/test-utils",
    "eslint",
    "eslint-plugin-vue",
    "jest",
    "jest-sonar",
    "jest-transform-stub",
    "ts-jest",
    "typescript",
    "vite",
    "vue-jest",
    "vue-tsc",
];

pub const SCRIPTS: &[(&str, &str)] = &[
    ("build", "vue-tsc --noEmit && vite build --emptyOutDir"),
    ("dev", "vite"),
    ("preview", "vite preview"),
    ("start", "vite"),
    ("test", "jest src/test/javascript/spec"),
];

/// Files copied verbatim to the project root.
pub const CONFIG_FILES: &[&str] =
    &[".eslintrc.js", "jest.config.js", "tsconfig.json", "vite.config.ts"];

pub const IMAGES: &[&str] = &["JHipster-Lite-neon-green.png", "VueLogo.png"];

/// Anchor line in `package.json` before which the test reporter block goes.
pub const JEST_SONAR_ANCHOR: &str = "\"cacheDirectories\": [";

pub const JEST_SONAR_BLOCK: &str = r#""jestSonar": {
    "reportPath": "target/test-results/jest",
    "reportFile": "TESTS-results-sonar.xml"
  },
  "cacheDirectories": ["#;
