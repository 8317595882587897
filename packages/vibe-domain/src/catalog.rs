use std::collections::BTreeSet;

use serde::Serialize;

use crate::normalize::normalize;

/// Immutable catalog entry. Constructed once at load; never mutated.
#[derive(Clone, Debug, Serialize)]
pub struct Product {
	pub id: u32,
	pub name: String,
	pub description: String,
	/// Derived from `description` once at construction; embeddings are always
	/// computed on this canonical form.
	pub normalized_description: String,
	/// Ordered as authored; order carries no significance.
	pub vibes: Vec<String>,
}
impl Product {
	pub fn new(
		id: u32,
		name: impl Into<String>,
		description: impl Into<String>,
		vibes: &[&str],
	) -> Self {
		let description = description.into();
		let normalized_description = normalize(&description);

		Self {
			id,
			name: name.into(),
			description,
			normalized_description,
			vibes: vibes.iter().map(|vibe| vibe.to_string()).collect(),
		}
	}
}

/// Ordered, read-only product collection. Position in the backing vector is
/// the tie-break order for equal similarity scores.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProductCatalog {
	products: Vec<Product>,
}
impl ProductCatalog {
	pub fn new(products: Vec<Product>) -> Self {
		Self { products }
	}

	/// The ten-product fashion catalog from the reference deployment.
	pub fn builtin() -> Self {
		Self::new(vec![
			Product::new(
				1,
				"Boho Maxi Dress",
				"Flowy silhouette in earthy tones with intricate embroidery, perfect for outdoor festivals and weekend markets. Pairs well with sandals and layered jewelry.",
				&["boho", "cozy", "earthy", "festival"],
			),
			Product::new(
				2,
				"Urban Streetwear Bomber",
				"Bold graphic bomber jacket with oversized fit and metallic accents. Makes a statement in the city with edgy attitude and contemporary street style.",
				&["urban", "streetwear", "bold", "edgy", "energetic"],
			),
			Product::new(
				3,
				"Minimalist Cashmere Sweater",
				"Soft cashmere knit in neutral tones with clean lines and timeless design. Ultimate comfort meets understated elegance for everyday wear.",
				&["minimal", "cozy", "soft", "elegant", "timeless"],
			),
			Product::new(
				4,
				"Sustainable Linen Set",
				"Eco-friendly linen co-ord set in natural beige. Breathable fabric perfect for conscious consumers seeking comfort and sustainability without compromising style.",
				&["sustainable", "minimal", "earthy", "conscious", "comfortable"],
			),
			Product::new(
				5,
				"Athleisure Jogger Set",
				"Performance fabric meets loungewear comfort. Sleek joggers and matching hoodie for gym sessions or relaxed weekend vibes with modern athletic aesthetic.",
				&["athletic", "comfortable", "modern", "casual", "energetic"],
			),
			Product::new(
				6,
				"Vintage Denim Jacket",
				"Classic distressed denim with retro wash and brass buttons. Timeless wardrobe staple that adds rugged charm and nostalgic appeal to any outfit.",
				&["vintage", "casual", "timeless", "rugged", "classic"],
			),
			Product::new(
				7,
				"Cozy Loungewear Bundle",
				"Ultra-soft matching sweatpants and oversized pullover in muted pastels. Perfect for self-care Sundays, reading nooks, and Netflix marathons at home.",
				&["cozy", "soft", "comfortable", "relaxed", "homey"],
			),
			Product::new(
				8,
				"Chic Blazer Dress",
				"Sharp tailoring meets feminine silhouette. Structured blazer-style dress in monochrome palette perfect for power meetings or sophisticated evening events.",
				&["chic", "elegant", "sophisticated", "modern", "powerful"],
			),
			Product::new(
				9,
				"Festival Fringe Top",
				"Playful crop top with cascading fringe details and tribal-inspired patterns. Free-spirited design perfect for music festivals and bohemian outdoor adventures.",
				&["boho", "festival", "playful", "free-spirited", "tribal"],
			),
			Product::new(
				10,
				"Tech Wear Cargo Pants",
				"Futuristic utility pants with multiple pockets and technical fabric. Perfect for urban explorers who value function, innovation, and cutting-edge street style.",
				&["urban", "streetwear", "futuristic", "functional", "innovative"],
			),
		])
	}

	pub fn len(&self) -> usize {
		self.products.len()
	}

	pub fn is_empty(&self) -> bool {
		self.products.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Product> {
		self.products.get(index)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Product> {
		self.products.iter()
	}

	pub fn normalized_descriptions(&self) -> Vec<String> {
		self.products.iter().map(|product| product.normalized_description.clone()).collect()
	}

	/// Sorted, deduplicated union of vibe tags across the catalog.
	pub fn all_vibes(&self) -> Vec<String> {
		let tags: BTreeSet<&str> = self
			.products
			.iter()
			.flat_map(|product| product.vibes.iter().map(String::as_str))
			.collect();

		tags.into_iter().map(str::to_string).collect()
	}
}
