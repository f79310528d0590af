// SPDX-License-Identifier: MPL-2.0
//! Built-in catalog contents shipped with the application.

use super::AnimationRecord;

/// Category label of the AI section in the "AI in Motion" variant.
pub const AI_CATEGORY: &str = "AI & Machine Learning";

/// The original six-clip mathematics showcase.
pub(super) fn classic_records() -> Vec<AnimationRecord> {
    vec![
        AnimationRecord::new(
            1,
            "Fractal Tree",
            "Recursive branching structure showing natural fractal patterns",
            "Fractals",
            "FractalTree.mp4",
        ),
        AnimationRecord::new(
            2,
            "Fluid Particles",
            "Wave propagation through a particle grid with spiral dynamics",
            "Physics",
            "FluidParticles.mp4",
        ),
        AnimationRecord::new(
            3,
            "Fibonacci Spiral",
            "Golden ratio rectangles forming the iconic Fibonacci sequence",
            "Number Theory",
            "FibonacciSpiral.mp4",
        ),
        AnimationRecord::new(
            4,
            "Wave Interference",
            "Two sine waves combining through constructive interference",
            "Physics",
            "WaveInterference.mp4",
        ),
        AnimationRecord::new(
            5,
            "Geometric Transformations",
            "Morphing shapes from triangles to circles",
            "Geometry",
            "GeometricTransformations.mp4",
        ),
        AnimationRecord::new(
            6,
            "Vector Field",
            "Circular flow visualization of a 2D vector field",
            "Vector Calculus",
            "VectorField.mp4",
        ),
    ]
}

/// AI concepts first, then the mathematics and physics clips, each with
/// formula, explanation and key concept.
pub(super) fn ai_in_motion_records() -> Vec<AnimationRecord> {
    vec![
        AnimationRecord::new(
            12,
            "Attention Mechanism",
            "How transformers understand relationships between words",
            AI_CATEGORY,
            "AttentionMechanism.mp4",
        )
        .with_formula(
            r"\text{Attention}(Q,K,V) = \text{softmax}\left(\frac{QK^T}{\sqrt{d_k}}\right)V",
        )
        .with_explanation(
            "The attention mechanism is the core technology behind modern Large Language \
             Models. It calculates how much each word should 'pay attention' to every other \
             word in a sentence. The Query (Q) represents what we're looking for, Keys (K) \
             represent available information, and Values (V) contain the actual data. The \
             softmax function converts these into probability weights, creating the attention \
             matrix that shows word relationships. In 'The cat sat on the mat,' attention \
             helps the model connect 'cat' with 'sat' more strongly than with 'mat.'",
        )
        .with_concept("Self-Attention & Transformers"),
        AnimationRecord::new(
            13,
            "Neural Network",
            "Signals propagating through layers of neurons",
            AI_CATEGORY,
            "NeuralNetworkActivation.mp4",
        )
        .with_formula(r"a^{(l)} = \sigma(W^{(l)}a^{(l-1)} + b^{(l)})")
        .with_explanation(
            "Each circle represents a neuron and lines show weighted connections between \
             them. Information flows from the input layer through hidden layers to the output \
             layer. At each neuron, inputs are multiplied by weights, summed, and passed \
             through an activation function σ such as sigmoid, ReLU or tanh, which introduces \
             the non-linearity that lets networks learn complex patterns. The animation shows \
             forward propagation: how data flows through the network to make predictions.",
        )
        .with_concept("Forward Propagation & Activation"),
        AnimationRecord::new(
            14,
            "Gradient Descent",
            "Optimization algorithm finding the minimum loss",
            AI_CATEGORY,
            "GradientDescent.mp4",
        )
        .with_formula(r"\theta_{t+1} = \theta_t - \alpha \nabla_\theta J(\theta_t)")
        .with_explanation(
            "Gradient descent is the optimization engine behind neural networks. Like a ball \
             rolling downhill, it looks for the minimum of a loss function J. The gradient ∇J \
             points in the direction of steepest ascent, so moving against it reduces error. \
             The learning rate α controls the step size: too large overshoots the minimum, \
             too small makes learning slow. Repeating the update gradually converges to \
             parameters θ where the model makes its best predictions.",
        )
        .with_concept("Optimization & Learning"),
        AnimationRecord::new(
            15,
            "Vector Embeddings",
            "Semantic relationships in vector space for RAG systems",
            AI_CATEGORY,
            "EmbeddingSpace.mp4",
        )
        .with_formula(
            r"\text{similarity}(\vec{v}_1, \vec{v}_2) = \frac{\vec{v}_1 \cdot \vec{v}_2}{||\vec{v}_1|| \, ||\vec{v}_2||}",
        )
        .with_explanation(
            "Vector embeddings represent meaning as numbers. Each word or document becomes a \
             high-dimensional vector where semantic similarity equals geometric proximity: \
             'cat', 'dog' and 'kitten' cluster together, as do 'car', 'truck' and 'vehicle'. \
             Cosine similarity measures the angle between vectors. In retrieval-augmented \
             generation the query is embedded and a vector database returns the closest \
             document chunks as context before a response is generated.",
        )
        .with_concept("Vector Space & Semantic Similarity"),
        AnimationRecord::new(
            16,
            "Context Window",
            "How LLMs manage conversation memory and token limits",
            AI_CATEGORY,
            "ContextWindow.mp4",
        )
        .with_formula(
            r"\text{Context} = [m_1, m_2, ..., m_n] \quad \text{where} \quad \sum \text{tokens}(m_i) \leq L",
        )
        .with_explanation(
            "The context window is the working memory of a language model: the maximum amount \
             of text it can process at once, measured in tokens. Every message consumes tokens \
             from this window. Once it fills up, older messages are pruned in a sliding-window \
             fashion and the model forgets the start of the conversation. The formula states \
             the constraint: the tokens of all messages must stay under the limit L.",
        )
        .with_concept("Memory Management & Token Limits"),
        AnimationRecord::new(
            17,
            "Temperature Sampling",
            "Controlling randomness and creativity in LLM outputs",
            AI_CATEGORY,
            "TemperatureSampling.mp4",
        )
        .with_formula(
            r"P_i = \frac{e^{z_i/T}}{\sum_j e^{z_j/T}} \quad \text{where } T = \text{temperature}",
        )
        .with_explanation(
            "Temperature reshapes the probability distribution over next tokens. At low \
             temperature the model almost always picks the most likely token, giving focused \
             and reproducible output. Medium temperature keeps a balanced amount of \
             randomness. High temperature flattens the distribution and produces more \
             diverse, surprising output. The formula shows how T scales the logits z before \
             the softmax.",
        )
        .with_concept("Probability Distribution & Sampling"),
        AnimationRecord::new(
            1,
            "Fractal Tree",
            "Recursive branching structure showing natural fractal patterns",
            "Fractals",
            "FractalTree.mp4",
        )
        .with_formula(r"\text{Branch}(n) = 2 \cdot \text{Branch}(n-1)")
        .with_explanation(
            "Each branch splits into two smaller branches at angle θ = π/6, with length \
             scaling by 0.7. The fractal dimension demonstrates self-similarity across scales.",
        )
        .with_concept("Recursive Functions & Fractals"),
        AnimationRecord::new(
            2,
            "Mandelbrot Set",
            "Infinite complexity emerging from simple iteration",
            "Fractals",
            "MandelbrotZoomSpectacular.mp4",
        )
        .with_formula(r"z_{n+1} = z_n^2 + c")
        .with_explanation(
            "The Mandelbrot set contains all complex numbers c for which the iterative \
             sequence remains bounded. Points are colored based on escape time, revealing \
             intricate boundary structures.",
        )
        .with_concept("Complex Dynamics"),
        AnimationRecord::new(
            3,
            "Lorenz Attractor",
            "Chaotic system exhibiting the butterfly effect",
            "Chaos Theory",
            "LorenzAttractorPath.mp4",
        )
        .with_formula(
            r"\frac{dx}{dt} = \sigma(y-x), \frac{dy}{dt} = x(\rho-z)-y, \frac{dz}{dt} = xy-\beta z",
        )
        .with_explanation(
            "A system of three differential equations modeling atmospheric convection. \
             Despite being deterministic, tiny changes in initial conditions lead to vastly \
             different trajectories.",
        )
        .with_concept("Differential Equations & Chaos"),
        AnimationRecord::new(
            4,
            "Fourier Series Drawing",
            "Complex shapes emerge from rotating circles",
            "Calculus",
            "FourierEpicyclesAnimated.mp4",
        )
        .with_formula(r"f(t) = \sum_{n=1}^{\infty} A_n \sin(n\omega t + \phi_n)")
        .with_explanation(
            "Any periodic function can be represented as a sum of sine and cosine waves. Each \
             rotating circle represents a frequency component in the Fourier decomposition.",
        )
        .with_concept("Fourier Analysis"),
        AnimationRecord::new(
            5,
            "Double Pendulum",
            "Three pendulums diverge showing sensitive dependence",
            "Physics",
            "DoublePendulumChaos.mp4",
        )
        .with_formula(r"m\ell^2\ddot{\theta} + mg\ell\sin(\theta) = 0")
        .with_explanation(
            "Three double pendulums with nearly identical starting positions quickly diverge \
             due to chaotic dynamics. Small differences amplify exponentially over time.",
        )
        .with_concept("Nonlinear Dynamics"),
        AnimationRecord::new(
            6,
            "Bubble Sort",
            "Step-by-step visualization of sorting algorithm",
            "Computer Science",
            "SortingVisualization.mp4",
        )
        .with_formula(r"T(n) = O(n^2)")
        .with_explanation(
            "Bubble sort compares adjacent elements and swaps them if they are in the wrong \
             order. The algorithm has quadratic time complexity in the worst and average case.",
        )
        .with_concept("Algorithm Complexity"),
        AnimationRecord::new(
            7,
            "Fibonacci Spiral",
            "Golden ratio rectangles forming the iconic sequence",
            "Number Theory",
            "FibonacciSpiral.mp4",
        )
        .with_formula(r"F_n = F_{n-1} + F_{n-2}, \quad \phi = \frac{1+\sqrt{5}}{2}")
        .with_explanation(
            "The Fibonacci sequence appears throughout nature. The ratio of consecutive terms \
             converges to the golden ratio φ ≈ 1.618.",
        )
        .with_concept("Recursive Sequences"),
        AnimationRecord::new(
            8,
            "Fluid Particles",
            "Wave propagation through a particle grid with spiral dynamics",
            "Physics",
            "FluidParticles.mp4",
        )
        .with_formula(r"\nabla^2 \phi = \frac{\partial^2 \phi}{\partial t^2}")
        .with_explanation(
            "Particles follow wave equations creating interference patterns. The spiral \
             motion emerges from radial displacement functions.",
        )
        .with_concept("Wave Equations"),
        AnimationRecord::new(
            9,
            "Wave Interference",
            "Two sine waves combining through constructive interference",
            "Physics",
            "WaveInterference.mp4",
        )
        .with_formula(r"y(x,t) = A_1\sin(kx-\omega t) + A_2\sin(kx-\omega t + \phi)")
        .with_explanation(
            "When two waves overlap, their amplitudes add. Constructive interference occurs \
             when waves are in phase, destructive when out of phase.",
        )
        .with_concept("Superposition Principle"),
        AnimationRecord::new(
            10,
            "Geometric Transformations",
            "Morphing shapes from triangles to circles",
            "Geometry",
            "GeometricTransformations.mp4",
        )
        .with_formula(r"\lim_{n \to \infty} P_n = \text{Circle}")
        .with_explanation(
            "As the number of sides increases, regular polygons approach a circle. This \
             demonstrates the concept of limits in geometry.",
        )
        .with_concept("Limits & Continuity"),
        AnimationRecord::new(
            11,
            "Vector Field Flow",
            "Flowing particles in a circular vector field",
            "Vector Calculus",
            "VectorFieldFlowEnhanced.mp4",
        )
        .with_formula(r"\vec{F}(x,y) = (-y, x)")
        .with_explanation(
            "This vector field represents rotational flow. Particles follow the vector field \
             lines, creating spiral trajectories.",
        )
        .with_concept("Vector Fields & Curl"),
    ]
}
