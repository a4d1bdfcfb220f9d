//! Demo dataset
//!
//! Three articles and five comments with fixed 2023 timestamps.

use crate::models::{Article, Comment};
use chrono::{DateTime, TimeZone, Utc};

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

const REACT_TYPESCRIPT_BODY: &str = r#"
<p>TypeScript has become an essential tool for many React developers. It provides static type checking, which can catch errors during development rather than at runtime.</p>
<h2>Why TypeScript?</h2>
<ul>
  <li>Better autocomplete and IntelliSense in code editors</li>
  <li>Catch errors during compilation rather than at runtime</li>
  <li>Make refactoring easier and safer</li>
</ul>
<h2>Setting Up a New Project</h2>
<pre><code>npm create vite@latest my-app -- --template react-ts</code></pre>
<h2>Conclusion</h2>
<p>TypeScript has a learning curve, but it makes React applications more robust.</p>
"#;

const TAILWIND_BODY: &str = r#"
<p>Tailwind CSS is a utility-first CSS framework that allows for rapid UI development without leaving your HTML.</p>
<h2>What Makes Tailwind Different?</h2>
<p>Instead of pre-designed components, Tailwind gives you utility classes you combine into custom designs.</p>
<pre><code>&lt;button class="bg-blue-500 text-white font-bold py-2 px-4 rounded"&gt;Click me&lt;/button&gt;</code></pre>
<h2>Setting Up Tailwind</h2>
<pre><code>npm install -D tailwindcss postcss autoprefixer
npx tailwindcss init -p</code></pre>
"#;

const ACCESSIBILITY_BODY: &str = r#"
<p>Web accessibility ensures that people with disabilities can use websites and web applications.</p>
<h2>Key Accessibility Practices</h2>
<h3>Semantic HTML</h3>
<pre><code>&lt;button onclick="navigate()"&gt;Click me&lt;/button&gt;</code></pre>
<h3>Keyboard Navigation</h3>
<p>Ensure all interactive elements can be reached and operated with a keyboard.</p>
<h3>Color Contrast</h3>
<p>WCAG recommends a minimum contrast ratio of 4.5:1 for normal text.</p>
"#;

/// Articles of the demo dataset
pub fn demo_articles() -> Vec<Article> {
    vec![
        Article {
            id: 1,
            title: "Getting Started with React and TypeScript".to_string(),
            slug: "getting-started-with-react-and-typescript".to_string(),
            excerpt: "Learn how to set up and use TypeScript with React for type-safe development."
                .to_string(),
            content: REACT_TYPESCRIPT_BODY.to_string(),
            author: "Jane Doe".to_string(),
            tags: tags(&["React", "TypeScript", "Web Development"]),
            featured: true,
            image_url: "https://images.pexels.com/photos/11035471/pexels-photo-11035471.jpeg"
                .to_string(),
            created_at: at(2023, 5, 15, 10, 0),
            updated_at: at(2023, 5, 15, 10, 0),
        },
        Article {
            id: 2,
            title: "The Power of Tailwind CSS".to_string(),
            slug: "the-power-of-tailwind-css".to_string(),
            excerpt: "Discover how Tailwind CSS can streamline your development workflow."
                .to_string(),
            content: TAILWIND_BODY.to_string(),
            author: "John Smith".to_string(),
            tags: tags(&["CSS", "Tailwind", "Web Development"]),
            featured: false,
            image_url: "https://images.pexels.com/photos/11035380/pexels-photo-11035380.jpeg"
                .to_string(),
            created_at: at(2023, 6, 22, 14, 30),
            updated_at: at(2023, 6, 22, 14, 30),
        },
        Article {
            id: 3,
            title: "Building Accessible Web Applications".to_string(),
            slug: "building-accessible-web-applications".to_string(),
            excerpt: "Learn why accessibility matters and how to implement it in your web apps."
                .to_string(),
            content: ACCESSIBILITY_BODY.to_string(),
            author: "Alex Johnson".to_string(),
            tags: tags(&["Accessibility", "Web Development", "UX"]),
            featured: true,
            image_url: "https://images.pexels.com/photos/12883026/pexels-photo-12883026.jpeg"
                .to_string(),
            created_at: at(2023, 7, 10, 9, 15),
            updated_at: at(2023, 7, 10, 9, 15),
        },
    ]
}

/// Comments of the demo dataset
pub fn demo_comments() -> Vec<Comment> {
    let comment = |id: i64, article_id: i64, author: &str, content: &str, created_at: DateTime<Utc>| Comment {
        id,
        article_id,
        author: author.to_string(),
        content: content.to_string(),
        created_at,
    };

    vec![
        comment(
            1,
            1,
            "Michael Brown",
            "Great article! I've been using TypeScript with React for a year now and can't imagine going back.",
            at(2023, 5, 15, 14, 30),
        ),
        comment(
            2,
            1,
            "Sarah Wilson",
            "Any recommendations for TypeScript learning resources for someone who already knows React?",
            at(2023, 5, 15, 16, 45),
        ),
        comment(
            3,
            2,
            "David Lee",
            "I was skeptical about Tailwind at first, but after a few projects I'm a convert.",
            at(2023, 6, 22, 18, 20),
        ),
        comment(
            4,
            3,
            "Emily Clark",
            "Accessibility is so important and often overlooked. Thanks for highlighting these practices!",
            at(2023, 7, 10, 11, 5),
        ),
        comment(
            5,
            3,
            "Robert Taylor",
            "Do you recommend any specific screen readers for testing during development?",
            at(2023, 7, 10, 13, 30),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::slug::generate_slug;

    #[test]
    fn test_seed_slugs_match_titles() {
        for article in demo_articles() {
            assert_eq!(generate_slug(&article.title), article.slug);
        }
    }

    #[test]
    fn test_seed_comments_reference_seed_articles() {
        let ids: Vec<i64> = demo_articles().iter().map(|a| a.id).collect();
        assert!(demo_comments().iter().all(|c| ids.contains(&c.article_id)));
    }

    #[test]
    fn test_seed_timestamps_are_consistent() {
        assert!(demo_articles().iter().all(|a| a.created_at <= a.updated_at));
    }
}
